// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the livegauge workspace
//!
//! Every fallible livegauge operation returns [`LiveGaugeError`]. Configuration
//! problems are reported synchronously, before any timer is scheduled; sink and
//! renderer failures are carried as values so the simulator can stop quietly.
//!
//! # Examples
//!
//! ```
//! use livegauge_error::{LiveGaugeError, Result};
//!
//! fn check_interval(interval_ms: i64) -> Result<()> {
//!     if interval_ms <= 0 {
//!         return Err(LiveGaugeError::invalid_config(
//!             "interval_ms",
//!             "must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_interval(-5).is_err());
//! ```

/// Root error type for all livegauge operations
#[derive(Debug, thiserror::Error)]
pub enum LiveGaugeError {
    /// A configuration value is out of range or inconsistent
    ///
    /// Raised at validation time, before a simulator is started or a chart
    /// is handed to a renderer.
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// The offending configuration key
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// A configuration document could not be decoded
    #[error("Failed to parse {format} configuration: {reason}")]
    ConfigParse {
        /// Document format (`json`, `toml`)
        format: &'static str,
        /// Decoder message
        reason: String,
    },

    /// Reading a configuration file failed
    #[error("I/O error while {context}")]
    Io {
        /// What was being attempted
        context: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A key-value update string was malformed
    #[error("Invalid update payload `{input}`: {reason}")]
    InvalidPayload {
        /// The raw payload
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// The update sink or renderer rejected a call
    #[error("Sink error: {context}")]
    Sink {
        /// Details reported by the sink
        context: String,
    },

    /// An operation was attempted in the wrong lifecycle state
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LiveGaugeError {
    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(format: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            format,
            reason: reason.into(),
        }
    }

    /// Create an I/O error with the given context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid payload error
    pub fn invalid_payload(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a sink error with the given context
    pub fn sink(context: impl Into<String>) -> Self {
        Self::Sink {
            context: context.into(),
        }
    }

    /// Create an invalid state error with the given message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error was raised while validating or loading configuration
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::ConfigParse { .. } | Self::Io { .. }
        )
    }

    /// Check if the simulator may keep its session alive after this error
    ///
    /// Sink failures stop ticking but never tear down the owning session.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Sink { .. } | Self::InvalidPayload { .. })
    }
}

/// Specialized Result type for livegauge operations
pub type Result<T> = std::result::Result<T, LiveGaugeError>;

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(LiveGaugeError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(LiveGaugeError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<LiveGaugeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            LiveGaugeError::UserError(inner) => LiveGaugeError::Sink {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}
