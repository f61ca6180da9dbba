//! Error types for bibcheck
//!
//! Only environmental failures are errors: input failures are a
//! `BibcheckError`, configuration failures a `ConfigError`. Style violations
//! found in a bibliography are issues attached to records, never `Err` values.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Syntactically valid configuration with an invalid value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Top-level error type for bibcheck
#[derive(Debug, thiserror::Error)]
pub enum BibcheckError {
    /// The bibliography file does not exist
    #[error("File '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
