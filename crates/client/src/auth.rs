//! Auth scopes, bearer token storage and temporary credentials.
//!
//! Responsibilities:
//! - Define `AuthScope`, which selects the bearer token sent with a request.
//! - Hold the firewall and rulestack admin JWTs (`TokenStore`).
//! - Define `TemporaryCredentials`, the short-lived identity used for signing.
//!
//! Does NOT handle:
//! - Obtaining tokens (see `client::tokens`).
//! - Obtaining temporary credentials (see `sts`).
//!
//! Invariants:
//! - Tokens and secret material are wrapped in `SecretString` and never appear
//!   in `Debug` output.
//! - An absent token is sent as an empty `Authorization` value.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Which bearer token, if any, a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScope {
    /// No `Authorization` header.
    #[default]
    None,
    /// The firewall admin JWT.
    Firewall,
    /// The rulestack admin JWT.
    Rulestack,
}

impl AuthScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Firewall => "Firewall",
            Self::Rulestack => "Rulestack",
        }
    }
}

impl FromStr for AuthScope {
    type Err = ClientError;

    /// Parse the permission names used by the API's resource wrappers.
    ///
    /// Matching ignores ASCII case; `""` and `"none"` both mean no token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else if s.eq_ignore_ascii_case("firewall") {
            Ok(Self::Firewall)
        } else if s.eq_ignore_ascii_case("rulestack") {
            Ok(Self::Rulestack)
        } else {
            Err(ClientError::InvalidArgument(format!(
                "Unknown auth type: {s:?}"
            )))
        }
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The admin JWTs held by a client.
#[derive(Debug, Default)]
pub struct TokenStore {
    firewall: Option<SecretString>,
    rulestack: Option<SecretString>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The token for `scope`; `None` for [`AuthScope::None`] or an absent token.
    pub fn get(&self, scope: AuthScope) -> Option<&SecretString> {
        match scope {
            AuthScope::None => None,
            AuthScope::Firewall => self.firewall.as_ref(),
            AuthScope::Rulestack => self.rulestack.as_ref(),
        }
    }

    /// Store a token for `scope`. Setting [`AuthScope::None`] is a no-op.
    pub fn set(&mut self, scope: AuthScope, token: String) {
        let token = Some(SecretString::new(token.into()));
        match scope {
            AuthScope::None => {}
            AuthScope::Firewall => self.firewall = token,
            AuthScope::Rulestack => self.rulestack = token,
        }
    }

    /// The `Authorization` header value for `scope`.
    ///
    /// `None` means the header is omitted. A scope whose token was never
    /// obtained yields an empty value.
    pub(crate) fn authorization(&self, scope: AuthScope) -> Option<&str> {
        match scope {
            AuthScope::None => None,
            _ => Some(self.get(scope).map(|t| t.expose_secret()).unwrap_or("")),
        }
    }

    pub fn firewall_jwt(&self) -> Option<&SecretString> {
        self.firewall.as_ref()
    }

    pub fn rulestack_jwt(&self) -> Option<&SecretString> {
        self.rulestack.as_ref()
    }
}

/// Short-lived credentials obtained by assuming a role.
///
/// Consumed by a single signing operation.
#[derive(Clone)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
    pub session_token: SecretString,
}

impl TemporaryCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        let secret_access_key: String = secret_access_key.into();
        let session_token: String = session_token.into();
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into()),
            session_token: SecretString::new(session_token.into()),
        }
    }
}

impl fmt::Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse() {
        assert_eq!("".parse::<AuthScope>().unwrap(), AuthScope::None);
        assert_eq!("Firewall".parse::<AuthScope>().unwrap(), AuthScope::Firewall);
        assert_eq!("Rulestack".parse::<AuthScope>().unwrap(), AuthScope::Rulestack);
        assert_eq!("none".parse::<AuthScope>().unwrap(), AuthScope::None);
        assert_eq!("FIREWALL".parse::<AuthScope>().unwrap(), AuthScope::Firewall);
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let err = "Admin".parse::<AuthScope>().unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(ref m) if m.contains("Admin")));
    }

    #[test]
    fn test_authorization_per_scope() {
        let mut store = TokenStore::new();
        assert_eq!(store.authorization(AuthScope::None), None);
        assert_eq!(store.authorization(AuthScope::Firewall), Some(""));

        store.set(AuthScope::Firewall, "fw-jwt".to_string());
        store.set(AuthScope::None, "ignored".to_string());
        assert_eq!(store.authorization(AuthScope::Firewall), Some("fw-jwt"));
        assert_eq!(store.authorization(AuthScope::Rulestack), Some(""));
        assert!(store.rulestack_jwt().is_none());
    }

    #[test]
    fn test_secrets_not_exposed_in_debug() {
        let mut store = TokenStore::new();
        store.set(AuthScope::Rulestack, "rulestack-secret-jwt".to_string());
        assert!(!format!("{store:?}").contains("rulestack-secret-jwt"));

        let creds = TemporaryCredentials::new("ASIAEXAMPLE", "temp-secret", "temp-session");
        let debug = format!("{creds:?}");
        assert!(debug.contains("ASIAEXAMPLE"));
        assert!(!debug.contains("temp-secret"));
        assert!(!debug.contains("temp-session"));
    }
}
