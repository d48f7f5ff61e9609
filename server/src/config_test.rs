use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// Config::from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    assert!(config.compression);
}

#[test]
fn overrides_are_applied() {
    let config = Config::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("SERVE_COMPRESSION", "off"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert!(!config.compression);
}

#[test]
fn blank_host_keeps_default() {
    let config = Config::from_lookup(lookup_from(&[("HOST", "  ")])).unwrap();
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
fn invalid_port_is_a_config_error() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { key: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn out_of_range_port_is_a_config_error() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { key: "PORT", .. }));
}

#[test]
fn invalid_compression_flag_is_a_config_error() {
    let err = Config::from_lookup(lookup_from(&[("SERVE_COMPRESSION", "sometimes")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { key: "SERVE_COMPRESSION", .. }));
}

#[test]
fn unrelated_keys_are_ignored() {
    let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("port", "1")])).unwrap();
    assert_eq!(config, Config::default());
}
