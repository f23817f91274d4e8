//! JSON credentials file loading.
//!
//! Responsibilities:
//! - Read the optional credentials file into a `ClientConfig` fallback layer.
//!
//! Does NOT handle:
//! - Precedence between layers (see builder.rs).
//! - Writing the file back; it is read-only input.
//!
//! Invariants:
//! - The file is read at most once per resolution.
//! - No path configured means an empty (all-unset) layer, not an error.

use std::path::Path;

use super::error::ConfigError;
use crate::types::ClientConfig;

/// Load the credentials file layer, or an empty layer when no path is given.
pub(crate) fn load_credentials_file(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ClientConfig::default());
    };

    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::CredentialsFileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let config = serde_json::from_str(&contents).map_err(|source| {
        ConfigError::CredentialsFileParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), "Loaded credentials file");
    Ok(config)
}
