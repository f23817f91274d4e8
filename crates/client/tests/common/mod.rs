//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Cloud NGFW client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here never read the environment or a credentials file
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::sync::Arc;

#[allow(unused_imports)]
pub use cloudngfw_client::testing::{
    StaticRoleAssumer, TEST_ACCESS_KEY_ID, TEST_SESSION_TOKEN, load_fixture,
};
#[allow(unused_imports)]
pub use cloudngfw_client::{
    ApiRequest, AuthScope, ClientBuilder, ClientError, CloudNgfwClient, Method, StatusResponse,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_REGION: &str = "us-east-1";
pub const FIREWALL_ROLE: &str = "arn:aws:iam::123456789012:role/FirewallAdmin";
pub const RULESTACK_ROLE: &str = "arn:aws:iam::123456789012:role/RulestackAdmin";

/// A builder pointed at the mock server over plain HTTP.
#[allow(dead_code)]
pub fn builder_for(server: &MockServer) -> ClientBuilder {
    let uri = server.uri();
    let host = uri.trim_start_matches("http://").to_string();
    CloudNgfwClient::builder()
        .host(host)
        .region(TEST_REGION)
        .protocol("http")
}

/// A built client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> CloudNgfwClient {
    builder_for(server).build().expect("client should build")
}

/// A builder with a recording role assumer.
#[allow(dead_code)]
pub fn builder_with_assumer(
    server: &MockServer,
    assumer: Arc<StaticRoleAssumer>,
) -> ClientBuilder {
    builder_for(server).role_assumer(assumer)
}
