//! Command-line surface.
//!
//! # Data Flow
//! ```text
//! argv
//!     → options.rs (RUN_OPTIONS table → clap::Command)
//!     → RawArgs (typed values, defaults applied)
//!     → ResolvedArgs (settings string coerced)
//!     → config::validate
//! ```
//!
//! Parsing and resolution are split so logging can be configured from the
//! debug flag before settings coercion starts emitting warnings.

pub mod options;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::config::schema::{DEFAULT_HOST, DEFAULT_PORT};
use crate::config::settings::{parse_settings, Settings};
use self::options::{OptionKind, OptionSpec, INCLUDE_LOGS_OPTION, RUN_OPTIONS};

pub const COMMAND_NAME: &str = "scrapyrt-serve";
const ABOUT: &str = "Run the ScrapyRT-compatible API server";

/// Option values as typed by the user, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArgs {
    pub port: u16,
    pub host: String,
    pub project: Option<PathBuf>,
    pub settings: Option<String>,
    pub timeout: Option<f64>,
    pub debug: bool,
    pub include_logs: bool,
}

/// CLI values after settings coercion; not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArgs {
    pub port: u16,
    pub host: String,
    pub project: Option<PathBuf>,
    pub settings: Settings,
    pub timeout: Option<f64>,
    pub debug: bool,
    pub include_logs: bool,
}

/// Build the server command.
pub fn command() -> clap::Command {
    options::build_command(COMMAND_NAME, ABOUT, RUN_OPTIONS)
}

/// Parse an argument vector (program name first).
pub fn parse_args<I, T>(args: I) -> Result<RawArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(RawArgs::from_matches(&matches))
}

impl RawArgs {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            port: matches
                .get_one::<u16>(options::PORT)
                .copied()
                .unwrap_or(DEFAULT_PORT),
            host: matches
                .get_one::<String>(options::HOST)
                .cloned()
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            project: matches.get_one::<PathBuf>(options::PROJECT).cloned(),
            settings: matches.get_one::<String>(options::SETTINGS).cloned(),
            timeout: matches.get_one::<f64>(options::TIMEOUT).copied(),
            debug: matches.get_flag(options::DEBUG),
            include_logs: toggle(matches, &INCLUDE_LOGS_OPTION),
        }
    }

    /// Coerce the settings string into typed values.
    ///
    /// Malformed entries are logged, so call this after logging is configured.
    pub fn resolve(self) -> ResolvedArgs {
        let settings = self
            .settings
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_settings)
            .unwrap_or_default();

        ResolvedArgs {
            port: self.port,
            host: self.host,
            project: self.project,
            settings,
            timeout: self.timeout,
            debug: self.debug,
            include_logs: self.include_logs,
        }
    }
}

/// Value of a `--x` / `--no-x` pair; the table default when neither was given.
fn toggle(matches: &ArgMatches, spec: &OptionSpec) -> bool {
    let OptionKind::Toggle { negated } = spec.kind else {
        return matches.get_flag(spec.id);
    };

    if matches.get_flag(negated) {
        false
    } else if matches.get_flag(spec.id) {
        true
    } else {
        spec.default == Some("true")
    }
}
