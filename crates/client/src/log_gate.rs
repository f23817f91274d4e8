//! Category-gated diagnostic output.
//!
//! Responsibilities:
//! - Decide whether a message is emitted, based on the configured `LogFlags`.
//! - Forward enabled messages to `tracing`.
//!
//! Does NOT handle:
//! - Installing a subscriber (see `logging`).
//!
//! Invariants:
//! - Logging never fails and never changes control flow.
//! - Only GET, POST, PUT and DELETE have a method category; any other method
//!   is never logged through [`LogGate::log`].

use cloudngfw_config::LogFlags;
use reqwest::Method;
use std::fmt;

/// Tracing target used for every gated message.
pub const LOG_TARGET: &str = "cloudngfw";

/// Filters log messages by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogGate {
    flags: LogFlags,
}

impl LogGate {
    pub fn new(flags: LogFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> LogFlags {
        self.flags
    }

    /// Whether every category in `flag` is enabled.
    pub fn enabled(&self, flag: LogFlags) -> bool {
        !flag.is_empty() && self.flags.contains(flag)
    }

    /// Log an API action if the category for `method` is enabled.
    ///
    /// ```rust,ignore
    /// client.log(&Method::POST, format_args!("creating rulestack {name}"));
    /// ```
    pub fn log(&self, method: &Method, args: fmt::Arguments<'_>) {
        let Some(flag) = method_flag(method) else {
            return;
        };
        if self.enabled(flag) {
            tracing::info!(target: LOG_TARGET, category = %method, "{args}");
        }
    }

    /// Emit a message in one of the non-method categories.
    pub(crate) fn emit(&self, flag: LogFlags, category: &str, args: fmt::Arguments<'_>) {
        if self.enabled(flag) {
            tracing::info!(target: LOG_TARGET, category, "{args}");
        }
    }
}

fn method_flag(method: &Method) -> Option<LogFlags> {
    match *method {
        Method::GET => Some(LogFlags::GET),
        Method::POST => Some(LogFlags::POST),
        Method::PUT => Some(LogFlags::PUT),
        Method::DELETE => Some(LogFlags::DELETE),
        _ => None,
    }
}
