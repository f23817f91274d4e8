//! Client builder for constructing [`CloudNgfwClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API over the configuration loader
//! - Resolving the configuration (or the offline configuration)
//! - Configuring the underlying HTTP client (timeout, TLS verification, proxy)
//! - Validating the custom headers once
//!
//! # What this module does NOT handle:
//! - Layer precedence and value validation (handled by `cloudngfw_config::ConfigLoader`)
//! - Token retrieval (handled by `CloudNgfwClient::refresh_jwts`)
//!
//! # Invariants
//! - A transport supplied through [`ClientBuilder::http_client`] is used as-is;
//!   the resolved timeout is still applied to every request.
//! - Offline mode never consults the environment, the credentials file or the network.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use cloudngfw_config::{
    ClientConfig, ConfigError, ConfigLoader, LogFlags, Protocol, ResolvedConfig,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::TokenStore;
use crate::client::CloudNgfwClient;
use crate::error::Result;
use crate::log_gate::LogGate;
use crate::sts::RoleAssumer;

/// Builder for creating a new [`CloudNgfwClient`].
///
/// Every value set here is the explicit configuration layer; anything left
/// unset is resolved from the environment (if enabled), the credentials file
/// and defaults.
///
/// # Example
///
/// ```rust,ignore
/// use cloudngfw_client::CloudNgfwClient;
///
/// let client = CloudNgfwClient::builder()
///     .check_environment(true)
///     .credentials_file("/etc/cloudngfw/creds.json")
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    loader: ConfigLoader,
    http_client: Option<reqwest::Client>,
    role_assumer: Option<Arc<dyn RoleAssumer>>,
    offline_data: Vec<Vec<u8>>,
}

impl ClientBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            loader: ConfigLoader::from_config(config),
            ..Self::default()
        }
    }

    /// Load a `.env` file into the process environment.
    ///
    /// The values are only used when [`check_environment`](Self::check_environment)
    /// is enabled.
    pub fn load_dotenv(mut self) -> Result<Self> {
        self.loader = self.loader.load_dotenv()?;
        Ok(self)
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.loader = self.loader.with_host(host.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.loader = self.loader.with_region(region.into());
        self
    }

    /// Set the protocol; see [`Protocol`] for the accepted values.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.loader = self.loader.with_protocol(protocol.into());
        self
    }

    /// Set the request timeout in seconds.
    ///
    /// Zero means "unset"; a negative value fails resolution.
    pub fn timeout(mut self, seconds: i64) -> Self {
        self.loader = self.loader.with_timeout(seconds);
        self
    }

    /// Extra headers sent with every request.
    ///
    /// They are applied after `Content-Type` and `Authorization`, so a
    /// same-named header here replaces those.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.loader = self.loader.with_headers(headers);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify_certificate(mut self, skip: bool) -> Self {
        self.loader = self.loader.with_skip_verify_certificate(skip);
        self
    }

    pub fn logging(mut self, logging: LogFlags) -> Self {
        self.loader = self.loader.with_logging(logging);
        self
    }

    pub fn firewall_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.loader = self.loader.with_firewall_role_arn(arn.into());
        self
    }

    pub fn rulestack_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.loader = self.loader.with_rulestack_role_arn(arn.into());
        self
    }

    pub fn shared_arn(mut self, arn: impl Into<String>) -> Self {
        self.loader = self.loader.with_shared_arn(arn.into());
        self
    }

    /// Static keys used as the base identity when assuming roles.
    pub fn static_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.loader = self
            .loader
            .with_static_credentials(access_key.into(), secret_key.into());
        self
    }

    /// Allow reading `CLOUD_NGFW_*` environment variables.
    pub fn check_environment(mut self, enabled: bool) -> Self {
        self.loader = self.loader.with_check_environment(enabled);
        self
    }

    /// JSON credentials file used as the last configuration layer.
    pub fn credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.loader = self.loader.with_credentials_file(path.into());
        self
    }

    /// Use a preconfigured HTTP transport instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom identity service for role assumption.
    ///
    /// By default an [`StsRoleAssumer`](crate::StsRoleAssumer) is created on
    /// the first refresh.
    pub fn role_assumer(mut self, assumer: Arc<dyn RoleAssumer>) -> Self {
        self.role_assumer = Some(assumer);
        self
    }

    /// Preload fake response data.
    ///
    /// With at least one entry, even an empty one, the client runs offline:
    /// the host is fixed, nothing is signed or sent, and every call receives
    /// a stub body.
    pub fn offline(mut self, data: Vec<Vec<u8>>) -> Self {
        self.offline_data = data;
        self
    }

    fn is_offline(&self) -> bool {
        !self.offline_data.is_empty()
    }

    /// Resolve the configuration and build the client.
    ///
    /// No network I/O happens here; see [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// - `ClientError::Config` if the configuration does not resolve, or a
    ///   custom header is not a valid HTTP header.
    /// - `ClientError::Transport` if the HTTP client fails to build.
    pub fn build(self) -> Result<CloudNgfwClient> {
        let offline = self.is_offline();
        let config = if offline {
            ResolvedConfig::offline(self.loader.config())
        } else {
            self.loader.resolve()?
        };

        let headers = header_map(&config.headers)?;
        let http = match self.http_client {
            Some(client) => client,
            None => build_transport(&config)?,
        };

        Ok(CloudNgfwClient {
            http,
            base_uri: config.base_uri(),
            headers,
            tokens: TokenStore::new(),
            log_gate: LogGate::new(config.logging),
            role_assumer: self.role_assumer,
            offline,
            config,
        })
    }

    /// Build the client and fetch every configured JWT.
    ///
    /// In offline mode no token is fetched.
    pub async fn initialize(self) -> Result<CloudNgfwClient> {
        let offline = self.is_offline();
        let mut client = self.build()?;
        if !offline {
            client.refresh_jwts().await?;
        }
        Ok(client)
    }
}

fn build_transport(config: &ResolvedConfig) -> Result<reqwest::Client> {
    let mut http_builder = reqwest::Client::builder().timeout(config.timeout);

    if config.skip_verify_certificate {
        if config.protocol == Protocol::Https {
            http_builder = http_builder.danger_accept_invalid_certs(true);
        } else {
            tracing::warn!(
                "skip_verify_certificate=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
            );
        }
    }

    Ok(http_builder.build()?)
}

fn header_map(headers: &HashMap<String, String>) -> std::result::Result<HeaderMap, ConfigError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ConfigError::InvalidConfiguration {
                field: "headers".to_string(),
                message: format!("invalid header name {name:?}: {e}"),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidConfiguration {
                field: "headers".to_string(),
                message: format!("invalid value for header {name:?}: {e}"),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
