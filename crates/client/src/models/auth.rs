//! Token exchange request and response models.

use serde::{Deserialize, Serialize};

use super::common::{ApiErrorDetails, ApiResponse, ResponseStatus};

/// Token lifetime requested from the token endpoints.
pub const TOKEN_EXPIRY_TIME: u32 = 90;

/// Tenant placeholder sent in the token key info.
pub const TOKEN_TENANT: &str = "XY";

/// Body of a token request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenRequest {
    pub expiry_time: u32,
    pub key_info: TokenKeyInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenKeyInfo {
    pub region: String,
    pub tenant: String,
}

impl TokenRequest {
    /// The request sent for both admin scopes.
    pub fn for_region(region: &str) -> Self {
        Self {
            expiry_time: TOKEN_EXPIRY_TIME,
            key_info: TokenKeyInfo {
                region: region.to_string(),
                tenant: TOKEN_TENANT.to_string(),
            },
        }
    }
}

/// Response of the token endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "ResponseStatus", default)]
    pub status: ResponseStatus,
    #[serde(rename = "Response", default)]
    pub response: TokenResponseDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TokenResponseDetails {
    /// The bearer token.
    pub token_id: String,
    pub expiry_time: Option<u32>,
}

impl ApiResponse for TokenResponse {
    fn is_success(&self) -> bool {
        self.status.is_ok()
    }

    fn error_details(&self) -> ApiErrorDetails {
        self.status.details()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_wire_format() {
        let body = serde_json::to_value(TokenRequest::for_region("us-east-1")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "ExpiryTime": 90,
                "KeyInfo": {"Region": "us-east-1", "Tenant": "XY"}
            })
        );
    }

    #[test]
    fn test_token_response_parse() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"ResponseStatus": {"ErrorCode": 0}, "Response": {"TokenId": "jwt-abc", "ExpiryTime": 90}}"#,
        )
        .unwrap();
        assert!(response.is_success());
        assert_eq!(response.response.token_id, "jwt-abc");
        assert_eq!(response.response.expiry_time, Some(90));
    }

    #[test]
    fn test_token_response_failure_without_body() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"ResponseStatus": {"ErrorCode": 403, "Reason": "Forbidden"}}"#,
        )
        .unwrap();
        assert!(!response.is_success());
        assert!(response.response.token_id.is_empty());
    }
}
