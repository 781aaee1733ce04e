//! Core error types for betterrest-core.
//!
//! Estimation can fail in exactly two ways: an input is outside its valid
//! range ([`CoreError::InvalidInput`]) or the coefficient table could not be
//! loaded ([`CoreError::ModelUnavailable`]). Both are recoverable; callers
//! usually show [`FALLBACK_MESSAGE`] instead of a bedtime.

use std::path::PathBuf;
use thiserror::Error;

/// Sentence shown in place of a bedtime when estimation fails.
pub const FALLBACK_MESSAGE: &str = "Error calculating bedtime";

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An estimator argument is outside its valid range
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The regression coefficients are missing or corrupt
    #[error("Model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for estimator inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric value outside its inclusive range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Value that is not a finite number
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Text that does not parse as the expected format
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors loading or evaluating the sleep model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Coefficient file could not be read
    #[error("Failed to read model from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Coefficient table did not parse
    #[error("Failed to parse model: {0}")]
    ParseFailed(String),

    /// Coefficient is NaN or infinite
    #[error("Coefficient '{name}' is not finite")]
    NonFiniteCoefficient { name: &'static str },

    /// Evaluation overflowed
    #[error("Model produced a non-finite prediction")]
    NonFinitePrediction,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not locate or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        ModelError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
