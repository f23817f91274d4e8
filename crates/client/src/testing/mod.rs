//! Testing utilities for Cloud NGFW client tests.
//!
//! This module provides helper functions for loading test fixtures and a
//! role assumer that never talks to AWS.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use cloudngfw_client::testing::{StaticRoleAssumer, load_fixture};
//!
//! let token = load_fixture("auth/firewall_token.json");
//! let assumer = StaticRoleAssumer::default().failing_for("arn:aws:iam::1:role/Broken");
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::TemporaryCredentials;
use crate::error::{ClientError, Result};
use crate::sts::RoleAssumer;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "auth/firewall_token.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Access key returned by [`StaticRoleAssumer`].
pub const TEST_ACCESS_KEY_ID: &str = "ASIATESTACCESSKEY";

/// Session token returned by [`StaticRoleAssumer`].
pub const TEST_SESSION_TOKEN: &str = "test-session-token";

/// A [`RoleAssumer`] that hands out fixed credentials and records every role
/// it was asked for.
#[derive(Debug, Default)]
pub struct StaticRoleAssumer {
    failing: HashSet<String>,
    assumed: Mutex<Vec<String>>,
}

impl StaticRoleAssumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make assumption of `role_arn` fail with `ClientError::RoleAssumption`.
    pub fn failing_for(mut self, role_arn: impl Into<String>) -> Self {
        self.failing.insert(role_arn.into());
        self
    }

    /// Roles requested so far, in order.
    pub fn assumed_roles(&self) -> Vec<String> {
        self.assumed
            .lock()
            .map(|roles| roles.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RoleAssumer for StaticRoleAssumer {
    async fn assume_role(&self, role_arn: &str) -> Result<TemporaryCredentials> {
        if let Ok(mut roles) = self.assumed.lock() {
            roles.push(role_arn.to_string());
        }
        if self.failing.contains(role_arn) {
            return Err(ClientError::RoleAssumption(format!(
                "{role_arn}: access denied"
            )));
        }
        Ok(TemporaryCredentials::new(
            TEST_ACCESS_KEY_ID,
            "test-secret-access-key",
            TEST_SESSION_TOKEN,
        ))
    }
}
