//! Domain records and configuration shared by the maple crates.
//!
//! The feed extraction engine in `maple-feed` produces the records defined in
//! [`weather`]; the binary reads [`AppConfig`] and passes what it needs down
//! explicitly.

pub mod app_config;
pub mod config;
pub mod weather;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use weather::{CurrentCondition, EntryCategory, Forecast, GenericEntry, Warning, WeatherReport};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
