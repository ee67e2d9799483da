//! ScrapyRT-compatible API server.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ cli ──▶ observability ──▶ config ──▶ http ──▶ axum::serve
//!            parse    logging policy    settings    CORS      host:port
//!                                       + project   + routes
//!                                       check       (factory)
//! ```
//!
//! This binary links `UnlinkedEngine`; crawl engines embed the library and
//! pass their own `RouteFactory` to `lifecycle::run`.

use std::process::ExitCode;

use scrapyrt_serve::cli;
use scrapyrt_serve::config::ConfigError;
use scrapyrt_serve::lifecycle::{self, StartupError};
use scrapyrt_serve::routing::UnlinkedEngine;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    match lifecycle::run(args, &UnlinkedEngine).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e @ StartupError::Logging(_)) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
        // Already logged by validation.
        Err(e @ StartupError::Config(ConfigError::ProjectNotFound { .. })) => {
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::from(e.exit_code())
        }
    }
}
