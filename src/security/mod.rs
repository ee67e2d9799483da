//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (preflight answer, CORS response headers)
//!     → Pass to routing
//! ```

pub mod cors;

pub use cors::permissive_cors;
