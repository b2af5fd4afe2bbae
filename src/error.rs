//! Application error type
//!
//! Aggregates the errors of every module and dependency used by the binary.

use crate::script::ScriptError;
use thiserror::Error;

/// Top-level error enum
#[derive(Debug, Error)]
pub enum Error {
    // ========== Configuration ==========
    /// TOML parse error
    #[error("Failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration parsed but failed validation
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    // ========== Order flow ==========
    /// Malformed action script
    #[error("Invalid script: {0}")]
    Script(#[from] ScriptError),

    /// The flow ended somewhere other than expected
    #[error("Expected route '{expected}', flow ended on '{actual}'")]
    UnexpectedRoute { expected: String, actual: String },

    // ========== System ==========
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Installing the Ctrl+C handler failed
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),

    // ========== Generic ==========
    /// Errors bubbling up from the interactive menu
    #[error("Menu error: {0}")]
    Anyhow(#[from] anyhow::Error),

    #[error("Application error: {message}")]
    Custom { message: String },
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
