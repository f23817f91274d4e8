//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` holding the explicit configuration.
//! - Merge explicit values, environment variables, the JSON credentials file and
//!   defaults into a `ResolvedConfig`.
//! - Validate the resolved values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Credentials file reading (delegated to file.rs).
//! - Building the HTTP transport (see the client crate).
//!
//! Invariants / Assumptions:
//! - Per field, the first non-empty source wins: explicit > environment > file > default.
//! - The environment is only consulted when `check_environment` is enabled, and
//!   only for fields the explicit layer left unset.
//! - Headers are never merged across layers.
//! - The TLS skip flag is an OR across layers.

use secrecy::SecretString;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use super::env::EnvLayer;
use super::error::ConfigError;
use super::file::load_credentials_file;
use crate::constants::{DEFAULT_PROTOCOL, DEFAULT_TIMEOUT_SECS, ENV_DOTENV_DISABLED};
use crate::logging::LogFlags;
use crate::types::{ClientConfig, Protocol, ResolvedConfig};

/// Configuration loader that resolves a [`ClientConfig`] against the
/// environment, the credentials file, and defaults.
///
/// # Example
///
/// ```rust,ignore
/// use cloudngfw_config::ConfigLoader;
///
/// let resolved = ConfigLoader::new()
///     .with_host("api.us-east-1.aws.cloudngfw.com".to_string())
///     .with_region("us-east-1".to_string())
///     .with_check_environment(true)
///     .resolve()?;
/// assert_eq!(resolved.base_uri(), "https://api.us-east-1.aws.cloudngfw.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit: ClientConfig,
}

impl ConfigLoader {
    /// Create a loader with nothing set explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { explicit: config }
    }

    /// The explicit configuration as set so far.
    pub fn config(&self) -> &ClientConfig {
        &self.explicit
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    /// Missing `.env` files are silently ignored. Values loaded this way are
    /// only used when environment checking is enabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the API host name.
    pub fn with_host(mut self, host: String) -> Self {
        self.explicit.host = Some(host);
        self
    }

    /// Set the cloud region.
    pub fn with_region(mut self, region: String) -> Self {
        self.explicit.region = Some(region);
        self
    }

    /// Set the protocol (`http` or `https`).
    pub fn with_protocol(mut self, protocol: String) -> Self {
        self.explicit.protocol = Some(protocol);
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: i64) -> Self {
        self.explicit.timeout = Some(seconds);
        self
    }

    /// Set the extra request headers.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.explicit.headers = headers;
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn with_skip_verify_certificate(mut self, skip: bool) -> Self {
        self.explicit.skip_verify_certificate = skip;
        self
    }

    /// Set the logging categories.
    pub fn with_logging(mut self, logging: LogFlags) -> Self {
        self.explicit.logging = logging;
        self
    }

    /// Set the firewall admin role.
    pub fn with_firewall_role_arn(mut self, arn: String) -> Self {
        self.explicit.firewall_role_arn = Some(arn);
        self
    }

    /// Set the rulestack admin role.
    pub fn with_rulestack_role_arn(mut self, arn: String) -> Self {
        self.explicit.rulestack_role_arn = Some(arn);
        self
    }

    /// Set the shared admin role.
    pub fn with_shared_arn(mut self, arn: String) -> Self {
        self.explicit.shared_arn = Some(arn);
        self
    }

    /// Set static base credentials for role assumption.
    pub fn with_static_credentials(mut self, access_key: String, secret_key: String) -> Self {
        self.explicit.access_key = Some(access_key);
        self.explicit.secret_key = Some(SecretString::new(secret_key.into()));
        self
    }

    /// Allow or forbid reading `CLOUD_NGFW_*` environment variables.
    pub fn with_check_environment(mut self, enabled: bool) -> Self {
        self.explicit.check_environment = enabled;
        self
    }

    /// Set the JSON credentials file used as a fallback layer.
    pub fn with_credentials_file(mut self, path: PathBuf) -> Self {
        self.explicit.credentials_file = Some(path);
        self
    }

    /// Resolve every field and validate the result.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingConfiguration` if host or region is empty after all layers.
    /// - `ConfigError::InvalidConfiguration` for a bad protocol, a non-positive or
    ///   unparsable timeout, malformed headers, a bad boolean, or an unknown
    ///   logging category.
    /// - `ConfigError::CredentialsFileRead` / `CredentialsFileParse` if the
    ///   configured credentials file cannot be loaded.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let explicit = &self.explicit;
        let env = EnvLayer::new(explicit.check_environment);
        let file = load_credentials_file(explicit.credentials_file.as_deref())?;

        let host = non_empty(&explicit.host)
            .or_else(|| env.host())
            .or_else(|| non_empty(&file.host))
            .unwrap_or_default();

        let region = non_empty(&explicit.region)
            .or_else(|| env.region())
            .or_else(|| non_empty(&file.region))
            .unwrap_or_default();

        let protocol: Protocol = non_empty(&explicit.protocol)
            .or_else(|| env.protocol())
            .or_else(|| non_empty(&file.protocol))
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string())
            .parse()
            .map_err(|message: String| ConfigError::invalid("protocol", message))?;

        let timeout = match explicit.timeout.filter(|t| *t != 0) {
            Some(t) => t,
            None => match env.timeout()? {
                Some(t) => t,
                None => file
                    .timeout
                    .filter(|t| *t != 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        };
        if timeout <= 0 {
            return Err(ConfigError::invalid(
                "timeout",
                format!("timeout for {host:?} must be a positive integer (got {timeout})"),
            ));
        }

        let headers = if !explicit.headers.is_empty() {
            explicit.headers.clone()
        } else {
            match env.headers()? {
                Some(headers) if !headers.is_empty() => headers,
                _ => file.headers.clone(),
            }
        };

        let skip_verify_certificate = explicit.skip_verify_certificate
            || env.skip_verify_certificate()?.unwrap_or(false)
            || file.skip_verify_certificate;

        let logging = if !explicit.logging.is_empty() {
            explicit.logging
        } else {
            let tokens = env
                .logging()
                .unwrap_or_else(|| file.logging_tokens.clone());
            if tokens.is_empty() {
                LogFlags::default_categories()
            } else {
                LogFlags::from_tokens(&tokens)
                    .map_err(|e| ConfigError::invalid("logging", e.to_string()))?
            }
        };

        if region.is_empty() {
            return Err(ConfigError::MissingConfiguration { field: "region" });
        }
        if host.is_empty() {
            return Err(ConfigError::MissingConfiguration { field: "host" });
        }

        let resolved = ResolvedConfig {
            host,
            region,
            protocol,
            timeout: Duration::from_secs(timeout.unsigned_abs()),
            headers,
            skip_verify_certificate,
            logging,
            firewall_role_arn: non_empty(&explicit.firewall_role_arn)
                .or_else(|| non_empty(&file.firewall_role_arn)),
            rulestack_role_arn: non_empty(&explicit.rulestack_role_arn)
                .or_else(|| non_empty(&file.rulestack_role_arn)),
            shared_arn: non_empty(&explicit.shared_arn).or_else(|| non_empty(&file.shared_arn)),
            access_key: non_empty(&explicit.access_key).or_else(|| non_empty(&file.access_key)),
            secret_key: explicit.secret_key.clone().or_else(|| file.secret_key.clone()),
        };

        validate_base_uri(&resolved)?;

        tracing::debug!(
            host = %resolved.host,
            region = %resolved.region,
            protocol = %resolved.protocol,
            timeout_secs = resolved.timeout.as_secs(),
            logging = %resolved.logging,
            "Resolved client configuration"
        );

        Ok(resolved)
    }
}

/// Treat `None` and `Some("")` alike.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Check that `{protocol}://{host}` forms an absolute URL with a host.
fn validate_base_uri(resolved: &ResolvedConfig) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(&resolved.base_uri()).map_err(|e| {
        ConfigError::invalid(
            "host",
            format!("{:?} does not form a valid URL: {e}", resolved.host),
        )
    })?;

    if parsed.host_str().is_none() {
        return Err(ConfigError::invalid(
            "host",
            format!("{:?} does not contain a host name", resolved.host),
        ));
    }

    Ok(())
}
