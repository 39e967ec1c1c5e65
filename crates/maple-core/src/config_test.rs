use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output_format, OutputFormat::Json);
    assert!(cfg.feed_path.is_none());
    assert!(cfg.latitude.is_none());
    assert!(cfg.longitude.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("MAPLE_ENV", "production");
    map.insert("MAPLE_LOG_LEVEL", "debug");
    map.insert("MAPLE_FEED_PATH", "./feeds/on-118_e.xml");
    map.insert("MAPLE_OUTPUT_FORMAT", "TEXT");
    map.insert("MAPLE_LATITUDE", "45.42");
    map.insert("MAPLE_LONGITUDE", "-75.69");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.feed_path.as_deref(),
        Some(std::path::Path::new("./feeds/on-118_e.xml"))
    );
    assert_eq!(cfg.output_format, OutputFormat::Text);
    assert_eq!(cfg.latitude, Some(45.42));
    assert_eq!(cfg.longitude, Some(-75.69));
}

#[test]
fn build_app_config_ignores_blank_feed_path() {
    let mut map = HashMap::new();
    map.insert("MAPLE_FEED_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.feed_path.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_output_format() {
    let mut map = HashMap::new();
    map.insert("MAPLE_OUTPUT_FORMAT", "yaml");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAPLE_OUTPUT_FORMAT"),
        "expected InvalidEnvVar(MAPLE_OUTPUT_FORMAT), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_numeric_latitude() {
    let mut map = HashMap::new();
    map.insert("MAPLE_LATITUDE", "north");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAPLE_LATITUDE"),
        "expected InvalidEnvVar(MAPLE_LATITUDE), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_out_of_range_longitude() {
    let mut map = HashMap::new();
    map.insert("MAPLE_LONGITUDE", "-200");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "MAPLE_LONGITUDE" && reason.contains("outside")),
        "expected InvalidEnvVar(MAPLE_LONGITUDE), got: {result:?}"
    );
}

#[test]
fn build_app_config_requires_both_coordinates() {
    let mut map = HashMap::new();
    map.insert("MAPLE_LATITUDE", "45.42");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref var)) if var == "MAPLE_LONGITUDE"),
        "expected MissingEnvVar(MAPLE_LONGITUDE), got: {result:?}"
    );
}

#[test]
fn location_pairs_configured_coordinates() {
    let mut map = HashMap::new();
    map.insert("MAPLE_LATITUDE", "45.42");
    map.insert("MAPLE_LONGITUDE", "-75.70");
    let config = build_app_config(lookup_from_map(&map)).expect("coordinates should parse");
    assert_eq!(config.location(), Some((45.42, -75.70)));

    let config = build_app_config(lookup_from_map(&HashMap::new())).unwrap();
    assert_eq!(config.location(), None);
}
