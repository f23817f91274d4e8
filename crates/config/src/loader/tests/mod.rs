//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and default resolution.
//! - Test environment variable handling and precedence.
//! - Test the credentials file layer.
//! - Test validation of resolved values.
//!
//! Invariants:
//! - Tests that touch the environment use `serial_test` and `env_lock()`.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a credentials file into `dir` and return its path.
pub fn write_credentials_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("credentials.json");
    std::fs::write(&path, contents).expect("Failed to write credentials file");
    path
}

/// Every `CLOUD_NGFW_*` variable unset, for tests that enable the environment.
pub fn cleared_env() -> [(&'static str, Option<&'static str>); 7] {
    use crate::constants::*;
    [
        (ENV_HOST, None),
        (ENV_REGION, None),
        (ENV_PROTOCOL, None),
        (ENV_TIMEOUT, None),
        (ENV_HEADERS, None),
        (ENV_VERIFY_CERTIFICATE, None),
        (ENV_LOGGING, None),
    ]
}
