//! Cloud NGFW management API client.
//!
//! This module provides [`CloudNgfwClient`], which holds the resolved
//! configuration, the HTTP transport and the admin JWTs.
//!
//! # Submodules
//! - [`builder`]: Configuration resolution and transport construction
//! - `tokens`: JWT refresh through role assumption (private module)
//! - `dispatch`: Request construction, signing and response validation (private module)
//!
//! # What this module does NOT handle:
//! - Resource-specific API wrappers (built on top of [`CloudNgfwClient::communicate`])
//! - Retrying failed calls (nothing is retried)
//!
//! # Invariants
//! - `refresh_jwts` takes `&mut self` and `communicate` takes `&self`, so a
//!   token is never written while a request reads it.
//! - In offline mode no request reaches the network.

pub mod builder;
mod dispatch;
mod tokens;

use std::fmt;
use std::sync::Arc;

use cloudngfw_config::ResolvedConfig;
use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::auth::{AuthScope, TokenStore};
use crate::log_gate::LogGate;
use crate::sts::RoleAssumer;

pub use dispatch::{ApiExchange, OFFLINE_RESPONSE_BODY};
pub use tokens::{FIREWALL_TOKEN_PATH, RULESTACK_TOKEN_PATH};

/// Cloud NGFW management API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use cloudngfw_client::CloudNgfwClient;
///
/// let client = CloudNgfwClient::builder()
///     .host("api.us-east-1.aws.cloudngfw.com")
///     .region("us-east-1")
///     .firewall_role_arn("arn:aws:iam::123456789012:role/FirewallAdmin")
///     .initialize()
///     .await?;
/// ```
#[derive(Debug)]
pub struct CloudNgfwClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ResolvedConfig,
    pub(crate) base_uri: String,
    pub(crate) headers: HeaderMap,
    pub(crate) tokens: TokenStore,
    pub(crate) log_gate: LogGate,
    pub(crate) role_assumer: Option<Arc<dyn RoleAssumer>>,
    pub(crate) offline: bool,
}

impl CloudNgfwClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ClientBuilder {
        builder::ClientBuilder::new()
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Base URI every request path is appended to.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The admin JWTs obtained so far.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Replace the JWT for `scope`, e.g. with one obtained out of band.
    pub fn set_token(&mut self, scope: AuthScope, token: String) {
        self.tokens.set(scope, token);
    }

    pub fn log_gate(&self) -> LogGate {
        self.log_gate
    }

    /// Log an API action, gated by the category for `method`.
    pub fn log(&self, method: &Method, args: fmt::Arguments<'_>) {
        self.log_gate.log(method, args);
    }

    /// Whether the client runs against preloaded offline data.
    pub fn is_offline(&self) -> bool {
        self.offline
    }
}
