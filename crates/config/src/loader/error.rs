//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration resolution failures.
//!
//! Does NOT handle:
//! - Client-side errors (see the client crate's `ClientError`).
//!
//! Invariants:
//! - Every variant names the field, variable, or path it concerns.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required field is empty after every layer was consulted.
    #[error("No {field} specified")]
    MissingConfiguration { field: &'static str },

    /// A value is malformed or out of range.
    #[error("Invalid value for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    #[error("Failed to read credentials file at {path}: {source}")]
    CredentialsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse credentials file at {path}: {source}")]
    CredentialsFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for `MissingConfiguration`.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingConfiguration { .. })
    }

    /// True for `InvalidConfiguration`.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
