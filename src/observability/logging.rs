//! Structured logging.
//!
//! # Responsibilities
//! - Map the debug flag to a `LoggingPolicy`
//! - Install the process-wide subscriber on first use
//! - Replace filter and format on every later `configure` call
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Filter and format sit behind `reload` handles so a second call never
//!   layers on top of the first
//! - `RUST_LOG` is ignored; the debug flag is the only verbosity input

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, reload, EnvFilter, Layer, Registry};

/// Log target of this crate.
pub const SERVICE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Log target reserved for the crawl-engine collaborator.
pub const CRAWL_ENGINE_TARGET: &str = "crawl_engine";

type FilterLayer = reload::Layer<EnvFilter, Registry>;
type Base = Layered<FilterLayer, Registry>;
type BoxedFormat = Box<dyn Layer<Base> + Send + Sync>;

struct Installed {
    policy: LoggingPolicy,
    filter: reload::Handle<EnvFilter, Registry>,
    format: reload::Handle<BoxedFormat, Base>,
}

static INSTALLED: Mutex<Option<Installed>> = Mutex::new(None);

/// Errors raised while installing or replacing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),

    #[error("failed to reload logging configuration: {0}")]
    Reload(#[from] reload::Error),
}

/// Verbosity and format profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingPolicy {
    /// Fine-grained service logs, source locations, engine at info.
    Debug,
    /// Service at info, engine at warn, compact lines.
    Standard,
}

impl LoggingPolicy {
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Self::Debug
        } else {
            Self::Standard
        }
    }

    /// `EnvFilter` directives for this profile.
    pub fn directives(&self) -> String {
        match self {
            Self::Debug => format!(
                "debug,{SERVICE_TARGET}=debug,{CRAWL_ENGINE_TARGET}=info,tower_http=debug"
            ),
            Self::Standard => format!(
                "info,{SERVICE_TARGET}=info,{CRAWL_ENGINE_TARGET}=warn,tower_http=info"
            ),
        }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.directives())
    }

    /// Formatting layer for this profile, writing to `writer`.
    pub fn fmt_layer<S, W>(&self, writer: W) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        match self {
            Self::Debug => fmt::layer::<S>()
                .with_writer(writer)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
            Self::Standard => fmt::layer::<S>()
                .with_writer(writer)
                .compact()
                .with_target(true)
                .boxed(),
        }
    }
}

/// Apply `policy` process-wide, replacing whatever was configured before.
pub fn configure(policy: LoggingPolicy) -> Result<(), LoggingError> {
    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);

    match installed.as_mut() {
        Some(current) => {
            current.filter.reload(policy.env_filter())?;
            current.format.reload(policy.fmt_layer::<Base, _>(std::io::stdout))?;
            current.policy = policy;
        }
        None => {
            let (filter, filter_handle) = reload::Layer::new(policy.env_filter());
            let (format, format_handle) =
                reload::Layer::new(policy.fmt_layer::<Base, _>(std::io::stdout));

            tracing_subscriber::registry()
                .with(filter)
                .with(format)
                .try_init()?;

            *installed = Some(Installed {
                policy,
                filter: filter_handle,
                format: format_handle,
            });
        }
    }
    Ok(())
}

/// The policy applied by the last successful `configure` call.
pub fn active_policy() -> Option<LoggingPolicy> {
    INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(|installed| installed.policy)
}
