//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CLOUD_NGFW_*` environment variables.
//! - Gate every read behind the "allow environment" flag.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading the credentials file (see file.rs).
//! - Precedence between layers (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - A disabled layer never touches the process environment.
//! - Values that fail to parse return ConfigError::InvalidConfiguration.

use std::collections::HashMap;

use super::error::ConfigError;
use crate::constants::{
    ENV_HEADERS, ENV_HOST, ENV_LOGGING, ENV_PROTOCOL, ENV_REGION, ENV_VERIFY_CERTIFICATE,
    ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean the way the API's other SDKs accept it.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// The environment layer of the resolver.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EnvLayer {
    enabled: bool,
}

impl EnvLayer {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn var(&self, key: &str) -> Option<String> {
        if self.enabled {
            env_var_or_none(key)
        } else {
            None
        }
    }

    pub(crate) fn host(&self) -> Option<String> {
        self.var(ENV_HOST)
    }

    pub(crate) fn region(&self) -> Option<String> {
        self.var(ENV_REGION)
    }

    pub(crate) fn protocol(&self) -> Option<String> {
        self.var(ENV_PROTOCOL)
    }

    pub(crate) fn timeout(&self) -> Result<Option<i64>, ConfigError> {
        self.var(ENV_TIMEOUT)
            .map(|value| {
                value.parse::<i64>().map_err(|e| {
                    ConfigError::invalid(
                        ENV_TIMEOUT,
                        format!("failed to parse timeout as an integer: {e}"),
                    )
                })
            })
            .transpose()
    }

    pub(crate) fn headers(&self) -> Result<Option<HashMap<String, String>>, ConfigError> {
        self.var(ENV_HEADERS)
            .map(|value| {
                serde_json::from_str::<HashMap<String, String>>(&value).map_err(|e| {
                    ConfigError::invalid(
                        ENV_HEADERS,
                        format!("must be a JSON object of string values: {e}"),
                    )
                })
            })
            .transpose()
    }

    pub(crate) fn skip_verify_certificate(&self) -> Result<Option<bool>, ConfigError> {
        self.var(ENV_VERIFY_CERTIFICATE)
            .map(|value| {
                parse_bool(&value).ok_or_else(|| {
                    ConfigError::invalid(ENV_VERIFY_CERTIFICATE, "must be true or false")
                })
            })
            .transpose()
    }

    pub(crate) fn logging(&self) -> Option<Vec<String>> {
        self.var(ENV_LOGGING)
            .map(|value| value.split(',').map(str::to_string).collect())
    }
}
