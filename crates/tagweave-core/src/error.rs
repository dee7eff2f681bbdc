//! Error types for tagweave-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a tag cloud.
#[derive(Error, Debug)]
pub enum CloudError {
    /// The input source failed mid-read. Anything accumulated before the
    /// fault is discarded; the run cannot resume.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Result type alias using [`CloudError`].
pub type CloudResult<T> = Result<T, CloudError>;
