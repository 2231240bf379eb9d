use serial_test::serial;
use std::env;

use site_watch::config::{environment::REQUIRED_VARS, Config, ConfigError};

// =============================================================================
// INTEGRATION TESTS - ENVIRONMENT CONFIGURATION
// =============================================================================

fn set_all() {
    env::set_var("WEBSITE_URL", "https://www.example.com");
    env::set_var("SENDER_EMAIL", "alerts@example.com");
    env::set_var("SENDER_PASSWORD", "app-password");
    env::set_var("RECEIVER_EMAIL", "oncall@example.com");
}

fn clear_all() {
    for key in REQUIRED_VARS {
        env::remove_var(key);
    }
}

#[serial]
#[test]
fn test_from_env_with_all_variables() {
    set_all();

    let config = Config::from_env().expect("configuration should load");
    assert_eq!(config.website_url, "https://www.example.com");
    assert_eq!(config.sender_email, "alerts@example.com");
    assert_eq!(config.receiver_email, "oncall@example.com");
    assert_eq!(config.intervals.ping_interval_minutes(), 5);

    clear_all();
}

#[serial]
#[test]
fn test_from_env_without_variables_is_fatal() {
    clear_all();

    let err = Config::from_env().unwrap_err();
    match err {
        ConfigError::Missing(keys) => assert_eq!(keys, REQUIRED_VARS.to_vec()),
        other => panic!("expected missing variables, got {other:?}"),
    }
}

#[serial]
#[test]
fn test_from_env_reports_single_missing_variable() {
    set_all();
    env::remove_var("RECEIVER_EMAIL");

    let err = Config::from_env().unwrap_err();
    assert_eq!(
        err.to_string(),
        "required environment variables are not set: RECEIVER_EMAIL"
    );

    clear_all();
}

#[serial]
#[test]
fn test_from_env_rejects_invalid_sender() {
    set_all();
    env::set_var("SENDER_EMAIL", "alerts.example.com");

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    clear_all();
}

#[serial]
#[test]
fn test_from_env_keeps_password_spacing() {
    set_all();
    env::set_var("SENDER_PASSWORD", "  abcd efgh ijkl mnop ");

    let config = Config::from_env().expect("configuration should load");
    assert_eq!(config.sender_password, "  abcd efgh ijkl mnop ");

    clear_all();
}
