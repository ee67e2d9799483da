//! Route factory seam.
//!
//! The crawl endpoints live outside this crate. The assembler only knows a
//! factory that turns run options into a mountable `axum::Router`.

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;

use crate::config::{RunConfiguration, Settings};

/// Options handed to the route factory.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    pub project_path: PathBuf,
    /// Default crawl timeout in seconds.
    pub timeout: Option<f64>,
    pub additional_settings: Settings,
    pub debug: bool,
    pub include_logs: bool,
}

impl RouteOptions {
    /// Timeout as a `Duration`, when one was given.
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

impl From<&RunConfiguration> for RouteOptions {
    fn from(config: &RunConfiguration) -> Self {
        Self {
            project_path: config.project_path.clone(),
            timeout: config.timeout,
            additional_settings: config.additional_settings.clone(),
            debug: config.debug,
            include_logs: config.include_logs,
        }
    }
}

/// Produces the ScrapyRT-compatible routes (crawl trigger, status).
pub trait RouteFactory: Send + Sync {
    fn routes(&self, options: &RouteOptions) -> Router;
}

impl<F> RouteFactory for F
where
    F: Fn(&RouteOptions) -> Router + Send + Sync,
{
    fn routes(&self, options: &RouteOptions) -> Router {
        self(options)
    }
}
