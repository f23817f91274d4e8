//! Subscriber setup for applications embedding the client.
//!
//! The client only emits `tracing` events. Applications that do not install
//! their own subscriber can call [`init`] (or configure [`LoggingConfig`]) to
//! see gated client output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cloudngfw_client::logging::LoggingConfig;
//!
//! LoggingConfig::new().with_json(true).init()?;
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset or invalid.
    pub default_directive: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns [`LoggingError::AlreadyInitialized`] if a global subscriber is
    /// already set. Callers that do not care can ignore the error.
    pub fn init(&self) -> Result<(), LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directive));

        let registry = tracing_subscriber::registry().with(env_filter);
        let result = if self.json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer()).try_init()
        };

        result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
    }
}

/// Install a text subscriber with the `info` default filter.
///
/// Repeated calls are harmless.
pub fn init() {
    let _ = LoggingConfig::default().init();
}

/// Errors from subscriber setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}
