//! Role assumption against the AWS Security Token Service.
//!
//! Responsibilities:
//! - Define the `RoleAssumer` seam used by the token refresh.
//! - Provide `StsRoleAssumer`, the production implementation.
//!
//! Does NOT handle:
//! - Exchanging the temporary credentials for a JWT (see `client::tokens`).
//!
//! Invariants:
//! - Every assumption uses the session name [`ROLE_SESSION_NAME`].
//! - Static keys, when configured, are the base identity; otherwise the default
//!   AWS credential chain is used.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_sts::error::DisplayErrorContext;
use cloudngfw_config::ResolvedConfig;
use secrecy::ExposeSecret;
use std::fmt;

use crate::auth::TemporaryCredentials;
use crate::error::{ClientError, Result};

/// Session name passed to every role assumption.
pub const ROLE_SESSION_NAME: &str = "sdk_session";

/// Something that can trade a role ARN for temporary credentials.
#[async_trait]
pub trait RoleAssumer: Send + Sync + fmt::Debug {
    /// Assume `role_arn` and return the resulting credentials.
    async fn assume_role(&self, role_arn: &str) -> Result<TemporaryCredentials>;
}

/// [`RoleAssumer`] backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct StsRoleAssumer {
    client: aws_sdk_sts::Client,
}

impl StsRoleAssumer {
    /// Create an assumer from an existing SDK client.
    pub fn new(client: aws_sdk_sts::Client) -> Self {
        Self { client }
    }

    /// Create an assumer for the resolved region and static keys.
    pub async fn from_config(config: &ResolvedConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if config.access_key.is_some() || config.secret_key.is_some() {
            let secret_key = config
                .secret_key
                .as_ref()
                .map(|s| s.expose_secret().to_string())
                .unwrap_or_default();
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone().unwrap_or_default(),
                secret_key,
                None,
                None,
                "cloudngfw-static",
            ));
        }

        Self::new(aws_sdk_sts::Client::new(&loader.load().await))
    }
}

#[async_trait]
impl RoleAssumer for StsRoleAssumer {
    async fn assume_role(&self, role_arn: &str) -> Result<TemporaryCredentials> {
        let output = self
            .client
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(ROLE_SESSION_NAME)
            .send()
            .await
            .map_err(|e| {
                ClientError::RoleAssumption(format!("{role_arn}: {}", DisplayErrorContext(&e)))
            })?;

        let credentials = output.credentials().ok_or_else(|| {
            ClientError::RoleAssumption(format!("{role_arn}: response carried no credentials"))
        })?;

        Ok(TemporaryCredentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            credentials.session_token(),
        ))
    }
}
