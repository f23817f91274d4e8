//! Cloud NGFW management API client.
//!
//! This crate provides the core of a client for the Cloud NGFW management
//! API: layered configuration resolution, admin JWT retrieval through AWS
//! role assumption, and a request dispatcher that signs requests, attaches
//! bearer tokens and validates responses through their own success flag.

mod auth;
pub mod client;
pub mod error;
pub mod log_gate;
pub mod logging;
pub mod models;
mod request;
mod signing;
pub mod sts;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AuthScope, TemporaryCredentials, TokenStore};
pub use client::builder::ClientBuilder;
pub use client::{
    ApiExchange, CloudNgfwClient, FIREWALL_TOKEN_PATH, OFFLINE_RESPONSE_BODY,
    RULESTACK_TOKEN_PATH,
};
pub use cloudngfw_config::{ClientConfig, ConfigError, LogFlags, Protocol, ResolvedConfig};
pub use error::{ClientError, Result};
pub use log_gate::LogGate;
pub use models::{
    ApiErrorDetails, ApiResponse, ResponseStatus, StatusResponse, TokenKeyInfo, TokenRequest,
    TokenResponse,
};
pub use request::ApiRequest;
pub use signing::SIGNING_SERVICE;
pub use sts::{ROLE_SESSION_NAME, RoleAssumer, StsRoleAssumer};

/// Re-exported so callers can name request methods without depending on reqwest.
pub use reqwest::Method;
