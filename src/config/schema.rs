//! Runtime configuration schema.
//!
//! `RunConfiguration` is the validated record handed to the service
//! assembler. It is built once per process and never mutated afterwards.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::settings::Settings;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 9080;

/// Validated configuration for one server run.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfiguration {
    /// Network bind address.
    pub host: String,

    /// Bind port (1-65535).
    pub port: u16,

    /// Crawl project directory; verified to exist.
    pub project_path: PathBuf,

    /// Default crawl timeout in seconds. `None` leaves the engine default.
    pub timeout: Option<f64>,

    /// Ad-hoc crawl-engine overrides.
    pub additional_settings: Settings,

    /// Verbose logging and detailed handler responses.
    pub debug: bool,

    /// Embed captured crawl logs in responses.
    pub include_logs: bool,
}

impl RunConfiguration {
    /// The `host:port` pair the server binds to.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
