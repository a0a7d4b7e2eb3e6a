//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur while loading, saving or editing configuration.
///
/// Classification and policy decisions are total and never produce these.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No setting with this key exists.
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// A setting value could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting key.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
