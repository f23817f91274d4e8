//! Logging categories for the management API client.
//!
//! Responsibilities:
//! - Define the logging categories as bitflags that combine with `|`.
//! - Parse category tokens (`"get"`, `"send"`, ...) into flags.
//!
//! Does NOT handle:
//! - Emitting log output (see the client crate's `LogGate`).
//! - Deciding which layer a token list comes from (see `loader`).
//!
//! Invariants:
//! - An empty flag set means "unset"; the loader replaces it with
//!   [`LogFlags::default_categories`].
//! - Unknown tokens are rejected, never ignored.

use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// Independent logging categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LogFlags: u32 {
        const QUIET = 1 << 0;
        const LOGIN = 1 << 1;
        const GET = 1 << 2;
        const POST = 1 << 3;
        const PUT = 1 << 4;
        const DELETE = 1 << 5;
        const PATH = 1 << 6;
        const SEND = 1 << 7;
        const RECEIVE = 1 << 8;
    }
}

/// Token names in bit order, used for parsing and display.
const TOKENS: [(&str, LogFlags); 9] = [
    ("quiet", LogFlags::QUIET),
    ("login", LogFlags::LOGIN),
    ("get", LogFlags::GET),
    ("post", LogFlags::POST),
    ("put", LogFlags::PUT),
    ("delete", LogFlags::DELETE),
    ("path", LogFlags::PATH),
    ("send", LogFlags::SEND),
    ("receive", LogFlags::RECEIVE),
];

/// Error returned when a logging token is not a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogToken(pub String);

impl fmt::Display for UnknownLogToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown logging requested: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLogToken {}

impl LogFlags {
    /// Categories applied when no source configures logging.
    pub const fn default_categories() -> Self {
        Self::LOGIN
            .union(Self::POST)
            .union(Self::PUT)
            .union(Self::DELETE)
    }

    /// Parse a single category token.
    pub fn from_token(token: &str) -> Result<Self, UnknownLogToken> {
        TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, flag)| *flag)
            .ok_or_else(|| UnknownLogToken(token.to_string()))
    }

    /// Parse a list of tokens into a combined flag set.
    ///
    /// Tokens must match exactly; surrounding whitespace is not stripped.
    /// An empty list yields an empty set; the caller decides the fallback.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, UnknownLogToken>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().try_fold(Self::empty(), |acc, token| {
            Ok(acc | Self::from_token(token.as_ref())?)
        })
    }

    /// Token names of every set category, in bit order.
    pub fn tokens(self) -> Vec<&'static str> {
        TOKENS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl FromStr for LogFlags {
    type Err = UnknownLogToken;

    /// Parse a comma-separated list such as `"get,post,send"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split(','))
    }
}

impl fmt::Display for LogFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let flags = LogFlags::default_categories();
        assert_eq!(
            flags,
            LogFlags::LOGIN | LogFlags::POST | LogFlags::PUT | LogFlags::DELETE
        );
        assert!(!flags.contains(LogFlags::GET));
        assert!(!flags.contains(LogFlags::SEND));
    }

    #[test]
    fn test_parse_every_token() {
        let all = "quiet,login,get,post,put,delete,path,send,receive"
            .parse::<LogFlags>()
            .unwrap();
        assert_eq!(all, LogFlags::all());
    }

    #[test]
    fn test_padded_token_rejected() {
        let err = "get, send".parse::<LogFlags>().unwrap_err();
        assert_eq!(err, UnknownLogToken(" send".to_string()));
        assert!(LogFlags::from_tokens(["receive "]).is_err());
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = "get,verbose".parse::<LogFlags>().unwrap_err();
        assert_eq!(err, UnknownLogToken("verbose".to_string()));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(LogFlags::from_token("GET").is_err());
    }

    #[test]
    fn test_empty_token_list_is_empty_set() {
        let flags = LogFlags::from_tokens(Vec::<String>::new()).unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_display_lists_tokens_in_bit_order() {
        let flags = LogFlags::SEND | LogFlags::GET | LogFlags::LOGIN;
        assert_eq!(flags.to_string(), "login,get,send");
    }
}
