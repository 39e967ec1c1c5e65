use crate::app_config::{AppConfig, Environment, OutputFormat};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid, or if only one
/// of the two site coordinates is set.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid, or if only one
/// of the two site coordinates is set.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_coordinate = |var: &str, bound: f64| -> Result<Option<f64>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if !(-bound..=bound).contains(&value) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("{value} is outside [-{bound}, {bound}]"),
            });
        }
        Ok(Some(value))
    };

    let env = parse_environment(&or_default("MAPLE_ENV", "development"));
    let log_level = or_default("MAPLE_LOG_LEVEL", "info");
    let feed_path = lookup("MAPLE_FEED_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let output_format = or_default("MAPLE_OUTPUT_FORMAT", "json")
        .parse::<OutputFormat>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "MAPLE_OUTPUT_FORMAT".to_string(),
            reason,
        })?;

    let latitude = parse_coordinate("MAPLE_LATITUDE", 90.0)?;
    let longitude = parse_coordinate("MAPLE_LONGITUDE", 180.0)?;
    match (latitude, longitude) {
        (Some(_), None) => return Err(ConfigError::MissingEnvVar("MAPLE_LONGITUDE".to_string())),
        (None, Some(_)) => return Err(ConfigError::MissingEnvVar("MAPLE_LATITUDE".to_string())),
        _ => {}
    }

    Ok(AppConfig {
        env,
        log_level,
        feed_path,
        output_format,
        latitude,
        longitude,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
