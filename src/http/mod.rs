//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! RunConfiguration + RouteFactory
//!     → server.rs (assemble router, middleware)
//!     → metadata.rs (static service description)
//!     → bind host:port, serve until shutdown
//! ```

pub mod metadata;
pub mod server;

pub use metadata::{ServiceMetadata, SERVICE_METADATA};
pub use server::{HttpServer, ServeError};
