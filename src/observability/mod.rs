//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! debug flag
//!     → LoggingPolicy (Debug | Standard)
//!     → logging::configure (install once, reload afterwards)
//! ```
//!
//! # Design Decisions
//! - One process-wide subscriber; policies replace each other wholesale
//! - Only startup orchestration calls `configure`

pub mod logging;

pub use logging::{configure, LoggingError, LoggingPolicy};
