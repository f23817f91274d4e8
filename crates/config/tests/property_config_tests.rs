//! Property-based tests for configuration precedence.
//!
//! These tests verify, over randomly generated inputs, that:
//! - A non-empty explicit value always wins over environment, file, and default.
//! - Any protocol other than `http`/`https` is rejected.
//! - Any non-positive timeout is rejected.
//! - Any logging token outside the known set is rejected.

use proptest::prelude::*;
use serial_test::serial;
use std::path::Path;

use cloudngfw_config::constants::{ENV_HOST, ENV_REGION, ENV_TIMEOUT};
use cloudngfw_config::{ConfigError, ConfigLoader, LogFlags};

/// Host names: lowercase DNS labels joined by dots.
fn host_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,10}", 1..4).prop_map(|labels| labels.join("."))
}

fn region_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("us-east-1".to_string()),
        Just("eu-west-2".to_string()),
        Just("ap-southeast-1".to_string()),
        "[a-z]{2}-[a-z]{4,9}-[1-9]",
    ]
}

fn write_file(dir: &Path, host: &str, region: &str, timeout: i64) -> std::path::PathBuf {
    let path = dir.join("credentials.json");
    let body = serde_json::json!({ "host": host, "region": region, "timeout": timeout });
    std::fs::write(&path, body.to_string()).unwrap();
    path
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    #[serial]
    fn explicit_values_always_win(
        explicit_host in host_strategy(),
        env_host in host_strategy(),
        file_host in host_strategy(),
        explicit_region in region_strategy(),
        env_region in region_strategy(),
        file_region in region_strategy(),
        explicit_timeout in 1i64..=3600,
        env_timeout in 1i64..=3600,
        file_timeout in 1i64..=3600,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), &file_host, &file_region, file_timeout);
        let env_timeout = env_timeout.to_string();

        let config = temp_env::with_vars(
            [
                (ENV_HOST, Some(env_host.as_str())),
                (ENV_REGION, Some(env_region.as_str())),
                (ENV_TIMEOUT, Some(env_timeout.as_str())),
            ],
            || {
                ConfigLoader::new()
                    .with_host(explicit_host.clone())
                    .with_region(explicit_region.clone())
                    .with_timeout(explicit_timeout)
                    .with_check_environment(true)
                    .with_credentials_file(path.clone())
                    .resolve()
            },
        )
        .unwrap();

        prop_assert_eq!(config.host, explicit_host);
        prop_assert_eq!(config.region, explicit_region);
        prop_assert_eq!(config.timeout.as_secs(), explicit_timeout.unsigned_abs());
    }

    #[test]
    fn file_wins_over_default_when_env_disabled(
        file_host in host_strategy(),
        file_region in region_strategy(),
        file_timeout in 1i64..=3600,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), &file_host, &file_region, file_timeout);

        let config = ConfigLoader::new()
            .with_credentials_file(path)
            .resolve()
            .unwrap();

        prop_assert_eq!(config.host, file_host);
        prop_assert_eq!(config.region, file_region);
        prop_assert_eq!(config.timeout.as_secs(), file_timeout.unsigned_abs());
    }

    #[test]
    fn unknown_protocols_rejected(protocol in "[a-zA-Z]{1,8}") {
        prop_assume!(protocol != "http" && protocol != "https");

        let result = ConfigLoader::new()
            .with_host("api.example.com".to_string())
            .with_region("us-east-1".to_string())
            .with_protocol(protocol)
            .resolve();

        let is_protocol_error = matches!(
            result,
            Err(ConfigError::InvalidConfiguration { ref field, .. }) if field == "protocol"
        );
        prop_assert!(is_protocol_error);
    }

    #[test]
    fn non_positive_timeouts_rejected(timeout in i64::MIN..0) {
        let result = ConfigLoader::new()
            .with_host("api.example.com".to_string())
            .with_region("us-east-1".to_string())
            .with_timeout(timeout)
            .resolve();

        prop_assert!(result.unwrap_err().is_invalid());
    }

    #[test]
    fn unknown_logging_tokens_rejected(token in "[a-z]{1,10}") {
        let known = ["quiet", "login", "get", "post", "put", "delete", "path", "send", "receive"];
        prop_assume!(!known.contains(&token.as_str()));

        prop_assert!(LogFlags::from_token(&token).is_err());
    }
}
