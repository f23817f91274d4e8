//! Configuration management for the Cloud NGFW client.
//!
//! This crate provides the configuration types for the management API client
//! and the layered loader that resolves them from explicit values, environment
//! variables, a JSON credentials file, and defaults.

pub mod constants;
mod loader;
pub mod logging;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use logging::{LogFlags, UnknownLogToken};
pub use types::{ClientConfig, Protocol, ResolvedConfig};
