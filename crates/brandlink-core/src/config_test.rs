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
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_is_case_insensitive() {
    assert_eq!(
        parse_environment("Production").unwrap(),
        Environment::Production
    );
    assert_eq!(parse_environment(" test ").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BRANDLINK_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, "http://localhost:3000/api/v1");
    assert!(cfg.api_token.is_none());
    assert!(cfg.api_key_hash_salt.is_none());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDLINK_BIND_ADDR"),
        "expected InvalidEnvVar(BRANDLINK_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_API_BASE_URL", "ftp://example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDLINK_API_BASE_URL"),
        "expected InvalidEnvVar(BRANDLINK_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_blank_token_is_none() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_API_TOKEN", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_token.is_none());
}

#[test]
fn build_app_config_reads_token_and_salt() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_API_TOKEN", "tok-123");
    map.insert("BRANDLINK_API_KEY_HASH_SALT", "pepper");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_token.as_deref(), Some("tok-123"));
    assert_eq!(cfg.api_key_hash_salt.as_deref(), Some("pepper"));
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_API_TOKEN", "super-secret-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("[redacted]"));
}

#[test]
fn request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDLINK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BRANDLINK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn rate_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("BRANDLINK_RATE_LIMIT_PER_MINUTE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDLINK_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(BRANDLINK_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}
