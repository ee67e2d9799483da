//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Parse CLI → Configure logging → Coerce settings → Validate
//!     → Assemble service → Bind → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful shutdown, exit code 0
//! ```
//!
//! # Design Decisions
//! - Ordered startup: logging first, listeners last
//! - Fail fast: any startup error is fatal, no retry

pub mod signals;
pub mod startup;

pub use startup::{run, StartupError};
