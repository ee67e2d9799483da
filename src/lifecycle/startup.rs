//! Startup orchestration.
//!
//! # Responsibilities
//! - Configure logging from the debug flag before anything else logs
//! - Coerce settings and validate the configuration
//! - Assemble the service and hand it to the server driver
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Stages run in order, never concurrently
//! - Listeners start last (traffic only when ready)

use thiserror::Error;

use crate::cli::RawArgs;
use crate::config::{validate, ConfigError, RunConfiguration};
use crate::http::{HttpServer, ServeError};
use crate::observability::logging::{configure, LoggingError, LoggingPolicy};
use crate::routing::RouteFactory;

/// Any error that stops the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Serve(#[from] ServeError),
}

impl StartupError {
    /// Process exit code for this failure. Every startup failure exits with 1.
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

/// Run the server until it is told to stop.
pub async fn run(args: RawArgs, factory: &dyn RouteFactory) -> Result<(), StartupError> {
    let server = prepare(args, factory)?;
    server.serve().await?;
    Ok(())
}

/// Every startup stage short of binding: logging, settings, validation,
/// assembly.
pub fn prepare(args: RawArgs, factory: &dyn RouteFactory) -> Result<HttpServer, StartupError> {
    configure(LoggingPolicy::from_debug(args.debug))?;

    let config = validate(args.resolve())?;
    log_summary(&config);

    Ok(HttpServer::new(config, factory))
}

fn log_summary(config: &RunConfiguration) {
    tracing::info!("Starting ScrapyRT-compatible API server");
    tracing::info!(
        host = %config.host,
        port = config.port,
        project_path = %config.project_path.display(),
        debug = config.debug,
        include_logs = config.include_logs,
        "Configuration loaded"
    );
    if !config.additional_settings.is_empty() {
        tracing::info!(
            settings = %serde_json::to_string(&config.additional_settings).unwrap_or_default(),
            "Additional settings"
        );
    }
    if let Some(timeout) = config.timeout {
        tracing::info!(timeout_secs = timeout, "Default timeout");
    }
}
