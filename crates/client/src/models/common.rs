//! Common response envelope shared by every management API call.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decodable API response that reports its own success.
///
/// The dispatcher uses [`ApiResponse::is_success`], not the HTTP status code,
/// to decide whether a call succeeded. Implement this for every resource type
/// passed to [`CloudNgfwClient::communicate`](crate::CloudNgfwClient::communicate).
pub trait ApiResponse: DeserializeOwned {
    /// Whether the response represents a successful call.
    fn is_success(&self) -> bool;

    /// Error details surfaced in [`ClientError::Api`](crate::ClientError::Api)
    /// when [`is_success`](Self::is_success) is false.
    fn error_details(&self) -> ApiErrorDetails {
        ApiErrorDetails::default()
    }
}

/// Structured failure details reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorDetails {
    pub code: Option<i64>,
    pub reason: Option<String>,
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.reason.as_deref()) {
            (Some(code), Some(reason)) => write!(f, "error code {code}: {reason}"),
            (Some(code), None) => write!(f, "error code {code}"),
            (None, Some(reason)) => f.write_str(reason),
            (None, None) => f.write_str("unsuccessful response"),
        }
    }
}

/// Status block embedded in every API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResponseStatus {
    pub error_code: i64,
    pub reason: String,
}

impl ResponseStatus {
    /// A zero error code means success.
    pub fn is_ok(&self) -> bool {
        self.error_code == 0
    }

    pub fn details(&self) -> ApiErrorDetails {
        ApiErrorDetails {
            code: Some(self.error_code),
            reason: (!self.reason.is_empty()).then(|| self.reason.clone()),
        }
    }
}

/// A response whose only interesting content is the status block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "ResponseStatus", default)]
    pub status: ResponseStatus,
}

impl ApiResponse for StatusResponse {
    fn is_success(&self) -> bool {
        self.status.is_ok()
    }

    fn error_details(&self) -> ApiErrorDetails {
        self.status.details()
    }
}
