//! JWT refresh through role assumption.
//!
//! Responsibilities:
//! - Assume the configured admin roles and exchange the temporary credentials
//!   for firewall and rulestack JWTs.
//!
//! Does NOT handle:
//! - Deciding when to refresh (the caller does; tokens carry no expiry tracking).
//!
//! Invariants:
//! - Firewall and rulestack refreshes are independent and sequential.
//! - A failure aborts the refresh; tokens stored by earlier steps are kept.
//! - A shared role fails before any token is touched.

use std::sync::Arc;

use reqwest::Method;

use crate::auth::AuthScope;
use crate::client::CloudNgfwClient;
use crate::error::{ClientError, Result};
use crate::models::{TokenRequest, TokenResponse};
use crate::request::ApiRequest;
use crate::sts::{RoleAssumer, StsRoleAssumer};
use cloudngfw_config::LogFlags;

/// Path of the firewall admin token endpoint.
pub const FIREWALL_TOKEN_PATH: [&str; 4] = ["v1", "mgmt", "tokens", "cloudfirewalladmin"];

/// Path of the rulestack admin token endpoint.
pub const RULESTACK_TOKEN_PATH: [&str; 4] = ["v1", "mgmt", "tokens", "cloudrulestackadmin"];

impl CloudNgfwClient {
    /// Refresh every JWT for which a role is configured.
    ///
    /// # Errors
    ///
    /// - `ClientError::UnsupportedOperation` if a shared role is configured.
    /// - `ClientError::RoleAssumption` if a role cannot be assumed.
    /// - Any error from [`communicate`](Self::communicate) for the token call.
    pub async fn refresh_jwts(&mut self) -> Result<()> {
        self.log_gate
            .emit(LogFlags::LOGIN, "login", format_args!("refreshing JWTs..."));

        if self.config.shared_arn.is_some() {
            return Err(ClientError::UnsupportedOperation(
                "no endpoint is known yet for shared ARN JWT retrieval".to_string(),
            ));
        }

        let firewall_role = self.config.firewall_role_arn.clone();
        let rulestack_role = self.config.rulestack_role_arn.clone();
        if firewall_role.is_none() && rulestack_role.is_none() {
            return Ok(());
        }

        let assumer = self.role_assumer().await;
        let request = TokenRequest::for_region(&self.config.region);

        if let Some(role) = firewall_role {
            self.log_gate.emit(
                LogFlags::LOGIN,
                "login",
                format_args!("refreshing firewall JWT..."),
            );
            let token = self
                .fetch_jwt(assumer.as_ref(), &role, &FIREWALL_TOKEN_PATH, &request)
                .await?;
            self.tokens.set(AuthScope::Firewall, token);
        }

        if let Some(role) = rulestack_role {
            self.log_gate.emit(
                LogFlags::LOGIN,
                "login",
                format_args!("refreshing rulestack JWT..."),
            );
            let token = self
                .fetch_jwt(assumer.as_ref(), &role, &RULESTACK_TOKEN_PATH, &request)
                .await?;
            self.tokens.set(AuthScope::Rulestack, token);
        }

        Ok(())
    }

    /// The injected role assumer, or an STS-backed one created on first use.
    async fn role_assumer(&mut self) -> Arc<dyn RoleAssumer> {
        if let Some(assumer) = &self.role_assumer {
            return Arc::clone(assumer);
        }
        let assumer: Arc<dyn RoleAssumer> = Arc::new(StsRoleAssumer::from_config(&self.config).await);
        self.role_assumer = Some(Arc::clone(&assumer));
        assumer
    }

    async fn fetch_jwt(
        &self,
        assumer: &dyn RoleAssumer,
        role_arn: &str,
        path: &[&str],
        body: &TokenRequest,
    ) -> Result<String> {
        let credentials = assumer.assume_role(role_arn).await?;
        let request = ApiRequest::new(AuthScope::None, Method::GET, path.iter().copied())
            .json(body)?
            .signed_with(credentials);
        let exchange = self.communicate::<TokenResponse>(request).await?;
        Ok(exchange.output.response.token_id)
    }
}
