//! Error types for the Cloud NGFW client.

use cloudngfw_config::ConfigError;
use thiserror::Error;

use crate::models::ApiErrorDetails;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration could not be resolved (missing or invalid value).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The caller misused the API (e.g. more than one credential set).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested operation is reserved but not implemented by the API.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Network, TLS, or timeout failure from the HTTP transport.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body is not valid JSON for the expected type.
    #[error("Malformed response: {source}")]
    MalformedResponse {
        body: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed, but reports failure.
    #[error("API error: {details}")]
    Api {
        body: Vec<u8>,
        details: ApiErrorDetails,
    },

    /// Role assumption against the identity service failed.
    #[error("Role assumption failed: {0}")]
    RoleAssumption(String),

    /// Request signing failed.
    #[error("Request signing failed: {0}")]
    Signing(String),
}

impl ClientError {
    /// The raw response body, for errors raised after a response was received.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::MalformedResponse { body, .. } | Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Structured details for API-reported failures.
    pub fn api_details(&self) -> Option<&ApiErrorDetails> {
        match self {
            Self::Api { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Check if this error came from configuration resolution.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error is a network/transport failure.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
