//! Configuration types for the Cloud NGFW client.
//!
//! Responsibilities:
//! - Define `ClientConfig`, the explicit (caller-supplied) configuration and the
//!   schema of the JSON credentials file.
//! - Define `ResolvedConfig`, the fully populated result of resolution.
//! - Define the `Protocol` enum.
//!
//! Does NOT handle:
//! - Layer precedence or validation (see `loader`).
//! - Building HTTP transports (see the client crate).
//!
//! Invariants:
//! - In `ClientConfig`, empty strings, a zero timeout and empty `LogFlags`
//!   all mean "unset".
//! - A `ResolvedConfig` produced by the loader always has a non-empty host and
//!   region and a positive timeout.

use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_TIMEOUT_SECS, OFFLINE_HOST};
use crate::logging::LogFlags;

/// Deserialization helper for optional secrets stored as plain strings.
mod optional_secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}

/// Explicit client configuration.
///
/// Every field is optional. Whatever is left unset is filled in by
/// [`ConfigLoader`](crate::ConfigLoader) from the environment (when
/// `check_environment` is enabled), the JSON credentials file, and defaults.
///
/// The same structure is the on-disk format of the credentials file:
///
/// ```json
/// {
///   "host": "api.us-east-1.aws.cloudngfw.com",
///   "region": "us-east-1",
///   "lfa-arn": "arn:aws:iam::123456789012:role/FirewallAdmin",
///   "lra-arn": "arn:aws:iam::123456789012:role/RulestackAdmin",
///   "logging": ["login", "get"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClientConfig {
    /// API host name (no scheme).
    pub host: Option<String>,
    /// Static access key used as the base identity for role assumption.
    pub access_key: Option<String>,
    /// Static secret key paired with `access_key`.
    #[serde(deserialize_with = "optional_secret_string::deserialize")]
    pub secret_key: Option<SecretString>,
    /// Cloud region, used for role assumption and request signing.
    pub region: Option<String>,
    /// `http` or `https`.
    pub protocol: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<i64>,
    /// Extra headers sent with every request.
    pub headers: HashMap<String, String>,
    /// Role assumed to obtain the firewall admin token.
    #[serde(rename = "lfa-arn")]
    pub firewall_role_arn: Option<String>,
    /// Role assumed to obtain the rulestack admin token.
    #[serde(rename = "lra-arn")]
    pub rulestack_role_arn: Option<String>,
    /// Single role for both scopes. Not supported by the API yet.
    #[serde(rename = "arn")]
    pub shared_arn: Option<String>,
    /// Disable TLS certificate verification.
    pub skip_verify_certificate: bool,
    /// Explicit logging categories.
    #[serde(skip)]
    pub logging: LogFlags,
    /// Logging categories as tokens; this is how the credentials file stores them.
    #[serde(rename = "logging")]
    pub logging_tokens: Vec<String>,
    /// Allow the loader to read `CLOUD_NGFW_*` environment variables.
    #[serde(skip)]
    pub check_environment: bool,
    /// Path of the JSON credentials file used as a fallback layer.
    #[serde(skip)]
    pub credentials_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a config with only host and region set.
    pub fn with_host_and_region(host: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            region: Some(region.into()),
            ..Self::default()
        }
    }
}

/// Wire protocol for the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(format!(
                "invalid protocol {other:?}; expected 'https' or 'http'"
            )),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub host: String,
    pub region: String,
    pub protocol: Protocol,
    pub timeout: Duration,
    pub headers: HashMap<String, String>,
    pub skip_verify_certificate: bool,
    pub logging: LogFlags,
    pub firewall_role_arn: Option<String>,
    pub rulestack_role_arn: Option<String>,
    pub shared_arn: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<SecretString>,
}

impl ResolvedConfig {
    /// Base URI of the management API, e.g. `https://api.example.com`.
    pub fn base_uri(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }

    /// Configuration used when the client runs against preloaded offline data.
    ///
    /// No layer other than the explicit config is consulted and nothing is
    /// validated; the host is always [`OFFLINE_HOST`]. Logging flags are taken
    /// as given, so an empty set logs nothing.
    pub fn offline(explicit: &ClientConfig) -> Self {
        let protocol = explicit
            .protocol
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();
        let timeout_secs = explicit
            .timeout
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            host: OFFLINE_HOST.to_string(),
            region: explicit.region.clone().unwrap_or_default(),
            protocol,
            timeout: Duration::from_secs(timeout_secs.unsigned_abs()),
            headers: explicit.headers.clone(),
            skip_verify_certificate: explicit.skip_verify_certificate,
            logging: explicit.logging,
            firewall_role_arn: explicit.firewall_role_arn.clone(),
            rulestack_role_arn: explicit.rulestack_role_arn.clone(),
            shared_arn: explicit.shared_arn.clone(),
            access_key: explicit.access_key.clone(),
            secret_key: explicit.secret_key.clone(),
        }
    }
}
