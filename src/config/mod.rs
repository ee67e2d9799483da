//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings string
//!     → settings.rs (split, coerce into SettingValue)
//! resolved CLI values
//!     → validation.rs (project path check)
//!     → RunConfiguration (validated, immutable)
//!     → handed to the service assembler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated
//! - Only a missing project directory is fatal

pub mod schema;
pub mod settings;
pub mod validation;

pub use schema::RunConfiguration;
pub use settings::{parse_settings, SettingValue, Settings};
pub use validation::{validate, ConfigError};
