//! Configuration validation.
//!
//! # Responsibilities
//! - Resolve the project path (explicit value or current directory)
//! - Reject a project path that is not an existing directory
//! - Pass every other field through unchanged
//!
//! # Design Decisions
//! - The project check is the only fatal validation; malformed settings were
//!   already dropped during coercion
//! - Runs once, before the service is assembled

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::ResolvedArgs;
use crate::config::schema::RunConfiguration;

/// Fatal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The project path does not name an existing directory.
    #[error("Project path does not exist: {}", path.display())]
    ProjectNotFound { path: PathBuf },

    /// No project was given and the working directory is unreadable.
    #[error("Cannot determine current directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}

/// Turn resolved CLI values into a `RunConfiguration`.
pub fn validate(args: ResolvedArgs) -> Result<RunConfiguration, ConfigError> {
    let project_path = match args.project {
        Some(path) => path,
        None => std::env::current_dir().map_err(ConfigError::WorkingDirectory)?,
    };

    if !project_path.is_dir() {
        tracing::error!(path = %project_path.display(), "Project path does not exist");
        return Err(ConfigError::ProjectNotFound { path: project_path });
    }

    Ok(RunConfiguration {
        host: args.host,
        port: args.port,
        project_path,
        timeout: args.timeout,
        additional_settings: args.settings,
        debug: args.debug,
        include_logs: args.include_logs,
    })
}
