use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for linesift operations
#[derive(Error, Debug)]
pub enum LineSiftError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {name}: {message}")]
    Read { name: String, message: String },
}

/// Errors raised while building a transform configuration
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown config key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Result type alias for linesift operations
pub type LineSiftResult<T> = Result<T, LineSiftError>;
