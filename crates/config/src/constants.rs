//! Centralized constants for the Cloud NGFW client workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic value duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: i64 = 20;

/// Default protocol for the management API.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Host used when the client runs against preloaded offline data.
pub const OFFLINE_HOST: &str = "test.nz";

// =============================================================================
// Environment Variables
// =============================================================================

/// Prefix shared by every environment variable the loader reads.
pub const ENV_PREFIX: &str = "CLOUD_NGFW_";

/// API host name.
pub const ENV_HOST: &str = "CLOUD_NGFW_HOST";

/// Cloud region.
pub const ENV_REGION: &str = "CLOUD_NGFW_REGION";

/// `http` or `https`.
pub const ENV_PROTOCOL: &str = "CLOUD_NGFW_PROTOCOL";

/// Request timeout in whole seconds.
pub const ENV_TIMEOUT: &str = "CLOUD_NGFW_TIMEOUT";

/// Extra request headers as a JSON object string.
pub const ENV_HEADERS: &str = "CLOUD_NGFW_HEADERS";

/// Boolean string; `true` disables TLS certificate verification.
pub const ENV_VERIFY_CERTIFICATE: &str = "CLOUD_NGFW_VERIFY_CERTIFICATE";

/// Comma-separated list of logging categories.
pub const ENV_LOGGING: &str = "CLOUD_NGFW_LOGGING";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
