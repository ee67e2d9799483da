//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RunConfiguration
//!     → RouteOptions (project, timeout, settings, debug, include_logs)
//!     → RouteFactory::routes (external crawl endpoints)
//!     → axum::Router merged by the assembler
//! ```
//!
//! # Design Decisions
//! - The factory is opaque; this crate never inspects the routes it returns
//! - Any `Fn(&RouteOptions) -> Router` is a factory

pub mod factory;
pub mod unlinked;

pub use factory::{RouteFactory, RouteOptions};
pub use unlinked::UnlinkedEngine;
