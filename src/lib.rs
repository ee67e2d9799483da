//! ScrapyRT-compatible API server: configuration and service assembly.
//!
//! Turns command-line input into a validated [`RunConfiguration`], mounts the
//! routes of a pluggable [`RouteFactory`] behind a permissive CORS policy, and
//! serves the result on `host:port`.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::RunConfiguration;
pub use http::HttpServer;
pub use routing::{RouteFactory, RouteOptions};
