//! Request dispatch: header assembly, signing, transport and response validation.
//!
//! Responsibilities:
//! - Build the URL and headers for an [`ApiRequest`].
//! - SigV4-sign requests that carry temporary credentials.
//! - Decode the body into the caller's type and apply its success predicate.
//!
//! Does NOT handle:
//! - Retrying (a request is sent exactly once).
//! - Interpreting HTTP status codes; the response's own success flag decides.
//!
//! Invariants:
//! - More than one credential set is rejected before any I/O.
//! - Configured custom headers are applied after `Content-Type` and
//!   `Authorization` and replace same-named values.
//! - The signature covers the final header set and the exact body sent.

use std::time::SystemTime;

use cloudngfw_config::LogFlags;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::auth::{AuthScope, TemporaryCredentials};
use crate::client::CloudNgfwClient;
use crate::error::{ClientError, Result};
use crate::models::ApiResponse;
use crate::request::ApiRequest;
use crate::signing::{SigningInput, sign_request};

/// Body returned for every call made in offline mode.
pub const OFFLINE_RESPONSE_BODY: &[u8] = br#"{"test"}"#;

/// A successful call: the raw body and its decoded form.
#[derive(Debug, Clone)]
pub struct ApiExchange<T> {
    pub body: Vec<u8>,
    pub output: T,
}

impl CloudNgfwClient {
    /// Send a request and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// - `ClientError::InvalidArgument` if more than one credential set is attached.
    /// - `ClientError::Transport` for network, TLS or timeout failures.
    /// - `ClientError::Signing` if the request cannot be signed.
    /// - `ClientError::MalformedResponse` if the body does not decode into `T`.
    /// - `ClientError::Api` if `T` reports failure; the body is kept in the error.
    pub async fn communicate<T: ApiResponse>(&self, request: ApiRequest) -> Result<ApiExchange<T>> {
        let body = self.communicate_raw(request).await?;

        let output: T = match serde_json::from_slice(&body) {
            Ok(output) => output,
            Err(source) => return Err(ClientError::MalformedResponse { body, source }),
        };

        if !output.is_success() {
            let details = output.error_details();
            return Err(ClientError::Api { body, details });
        }

        Ok(ApiExchange { body, output })
    }

    /// Send a request and return the response body whatever it contains.
    pub async fn communicate_raw(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let ApiRequest {
            scope,
            method,
            path,
            payload,
            mut credentials,
        } = request;

        if credentials.len() > 1 {
            return Err(ClientError::InvalidArgument(format!(
                "only one set of credentials is allowed, got {}",
                credentials.len()
            )));
        }

        let data = payload.unwrap_or_default();
        self.log_gate.emit(
            LogFlags::SEND,
            "send",
            format_args!("sending: {}", String::from_utf8_lossy(&data)),
        );

        let body = if self.offline {
            OFFLINE_RESPONSE_BODY.to_vec()
        } else {
            self.send(scope, method, &path, data, credentials.pop())
                .await?
        };

        self.log_gate.emit(
            LogFlags::RECEIVE,
            "receive",
            format_args!("received: {}", String::from_utf8_lossy(&body)),
        );

        Ok(body)
    }

    async fn send(
        &self,
        scope: AuthScope,
        method: Method,
        path: &[String],
        data: Vec<u8>,
        credentials: Option<TemporaryCredentials>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base_uri, path.join("/"));
        self.log_gate
            .emit(LogFlags::PATH, "path", format_args!("{method} {url}"));

        let mut headers = self.request_headers(scope)?;

        if let Some(credentials) = credentials {
            let input = SigningInput {
                method: method.as_str(),
                url: &url,
                headers: &headers,
                body: &data,
                region: &self.config.region,
                time: SystemTime::now(),
            };
            for (name, value) in sign_request(&input, credentials)? {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| ClientError::Signing(e.to_string()))?;
                let value =
                    HeaderValue::from_str(&value).map_err(|e| ClientError::Signing(e.to_string()))?;
                headers.insert(name, value);
            }
        }

        let response = self
            .http
            .request(method, &url)
            .headers(headers)
            .body(data)
            .timeout(self.config.timeout)
            .send()
            .await?;

        Ok(response.bytes().await?.to_vec())
    }

    fn request_headers(&self, scope: AuthScope) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.tokens.authorization(scope) {
            let mut value = HeaderValue::from_str(token).map_err(|_| {
                ClientError::InvalidArgument(format!(
                    "the {scope} token is not a valid header value"
                ))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }

        Ok(headers)
    }
}
