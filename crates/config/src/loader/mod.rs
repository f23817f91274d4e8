//! Configuration loader for explicit values, environment variables, and files.
//!
//! Responsibilities:
//! - Provide the builder-pattern `ConfigLoader` that resolves a `ClientConfig`.
//! - Read `CLOUD_NGFW_*` environment variables when allowed.
//! - Read the optional JSON credentials file.
//!
//! Does NOT handle:
//! - HTTP transport construction or token retrieval (see the client crate).
//!
//! Invariants / Assumptions:
//! - Explicit values take precedence over environment variables, which take
//!   precedence over the credentials file, which takes precedence over defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
