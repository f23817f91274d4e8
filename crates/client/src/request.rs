//! Description of a single management API call.

use reqwest::Method;
use serde::Serialize;

use crate::auth::{AuthScope, TemporaryCredentials};
use crate::error::{ClientError, Result};

/// A request handed to [`CloudNgfwClient::communicate`](crate::CloudNgfwClient::communicate).
///
/// # Example
///
/// ```rust,ignore
/// let request = ApiRequest::new(AuthScope::Rulestack, Method::GET, ["v1", "config", "ngfirewalls"]);
/// let exchange = client.communicate::<StatusResponse>(request).await?;
/// ```
#[derive(Debug)]
pub struct ApiRequest {
    pub(crate) scope: AuthScope,
    pub(crate) method: Method,
    pub(crate) path: Vec<String>,
    pub(crate) payload: Option<Vec<u8>>,
    pub(crate) credentials: Vec<TemporaryCredentials>,
}

impl ApiRequest {
    /// Create a request; `path` segments are joined with `/` after the base URI.
    pub fn new<I, S>(scope: AuthScope, method: Method, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope,
            method,
            path: path.into_iter().map(Into::into).collect(),
            payload: None,
            credentials: Vec::new(),
        }
    }

    /// Attach a JSON payload.
    ///
    /// # Errors
    /// Returns [`ClientError::Serialization`] if `payload` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.payload = Some(serde_json::to_vec(payload).map_err(ClientError::Serialization)?);
        Ok(self)
    }

    /// Sign the request with temporary credentials.
    ///
    /// At most one credential set may be attached; the dispatcher rejects
    /// more before doing any I/O.
    pub fn signed_with(mut self, credentials: TemporaryCredentials) -> Self {
        self.credentials.push(credentials);
        self
    }

    pub fn scope(&self) -> AuthScope {
        self.scope
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The serialized payload, empty when none was attached.
    pub fn body(&self) -> &[u8] {
        self.payload.as_deref().unwrap_or_default()
    }
}
