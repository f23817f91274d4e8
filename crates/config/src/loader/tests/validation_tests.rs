//! Validation tests for resolved configuration values.
//!
//! Responsibilities:
//! - Test protocol validation.
//! - Test timeout validation (negative, zero from env, parse failures).
//! - Test logging token validation.
//! - Test base URI validation.

use serial_test::serial;

use super::{cleared_env, env_lock, write_credentials_file};
use crate::constants::{ENV_LOGGING, ENV_PROTOCOL, ENV_TIMEOUT};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn minimal() -> ConfigLoader {
    ConfigLoader::new()
        .with_host("api.example.com".to_string())
        .with_region("us-east-1".to_string())
}

fn assert_invalid(result: Result<crate::ResolvedConfig, ConfigError>, expected_field: &str) {
    match result {
        Err(ConfigError::InvalidConfiguration { field, message }) => {
            assert_eq!(field, expected_field, "unexpected field ({message})");
        }
        Ok(_) => panic!("Expected InvalidConfiguration for {expected_field}, got Ok"),
        Err(e) => panic!("Expected InvalidConfiguration for {expected_field}, got {e:?}"),
    }
}

// ============================================================================
// Protocol
// ============================================================================

#[test]
fn test_protocol_must_be_http_or_https() {
    for protocol in ["ftp", "HTTPS", "https ", "tcp"] {
        assert_invalid(minimal().with_protocol(protocol.to_string()).resolve(), "protocol");
    }
}

#[test]
#[serial]
fn test_protocol_from_env_is_validated() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(cleared_env(), || {
        temp_env::with_vars([(ENV_PROTOCOL, Some("gopher"))], || {
            assert_invalid(minimal().with_check_environment(true).resolve(), "protocol");
        });
    });
}

#[test]
fn test_protocol_from_file_is_validated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_credentials_file(dir.path(), r#"{"protocol": "smtp"}"#);
    assert_invalid(minimal().with_credentials_file(path).resolve(), "protocol");
}

// ============================================================================
// Timeout
// ============================================================================

#[test]
fn test_negative_explicit_timeout_invalid() {
    let result = minimal().with_timeout(-5).resolve();
    match result {
        Err(ConfigError::InvalidConfiguration { field, message }) => {
            assert_eq!(field, "timeout");
            assert!(
                message.contains("must be a positive integer"),
                "Expected message about positive timeout, got: {message}"
            );
        }
        other => panic!("Expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn test_zero_explicit_timeout_falls_back_to_default() {
    let config = minimal().with_timeout(0).resolve().unwrap();
    assert_eq!(config.timeout.as_secs(), 20);
}

#[test]
fn test_negative_file_timeout_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_credentials_file(dir.path(), r#"{"timeout": -1}"#);
    assert_invalid(minimal().with_credentials_file(path).resolve(), "timeout");
}

#[test]
#[serial]
fn test_zero_env_timeout_invalid() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(cleared_env(), || {
        temp_env::with_vars([(ENV_TIMEOUT, Some("0"))], || {
            assert_invalid(minimal().with_check_environment(true).resolve(), "timeout");
        });
    });
}

#[test]
#[serial]
fn test_unparsable_env_timeout_invalid() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(cleared_env(), || {
        for value in ["twenty", "1.5", "20s"] {
            temp_env::with_vars([(ENV_TIMEOUT, Some(value))], || {
                assert_invalid(minimal().with_check_environment(true).resolve(), ENV_TIMEOUT);
            });
        }
    });
}

// ============================================================================
// Logging
// ============================================================================

#[test]
#[serial]
fn test_unknown_logging_token_from_env_invalid() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(cleared_env(), || {
        temp_env::with_vars([(ENV_LOGGING, Some("get,verbose"))], || {
            assert_invalid(minimal().with_check_environment(true).resolve(), "logging");
        });
    });
}

#[test]
#[serial]
fn test_padded_logging_token_from_env_invalid() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(cleared_env(), || {
        temp_env::with_vars([(ENV_LOGGING, Some("get, post"))], || {
            assert_invalid(minimal().with_check_environment(true).resolve(), "logging");
        });
    });
}

#[test]
fn test_unknown_logging_token_from_file_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_credentials_file(dir.path(), r#"{"logging": ["login", "trace"]}"#);
    assert_invalid(minimal().with_credentials_file(path).resolve(), "logging");
}

// ============================================================================
// Host
// ============================================================================

#[test]
fn test_host_that_is_not_a_url_invalid() {
    let result = ConfigLoader::new()
        .with_host("bad host name".to_string())
        .with_region("us-east-1".to_string())
        .resolve();
    assert_invalid(result, "host");
}
