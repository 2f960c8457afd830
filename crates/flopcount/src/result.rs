//! Result and error types for flopcount.
//!
//! Only recoverable input problems live here. Broken internal contracts
//! (sizing a non-arithmetic opcode, looking up an unregistered function,
//! counters out of step with their registry) panic instead.

use thiserror::Error;

/// Result type for flopcount operations
pub type FlopResult<T> = Result<T, FlopError>;

/// Errors that can occur in flopcount
#[derive(Debug, Error)]
pub enum FlopError {
    /// A classification pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// Error message
        message: String,
    },

    /// Opcode name outside the floating-point taxonomy
    #[error("Unknown opcode: {name}")]
    UnknownOpcode {
        /// Raw opcode name
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Trace file error
    #[error("Trace error: {message}")]
    Trace {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FlopError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a trace error
    #[must_use]
    pub fn trace(message: impl Into<String>) -> Self {
        Self::Trace {
            message: message.into(),
        }
    }
}
