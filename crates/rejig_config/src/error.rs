//! Error types for application configuration.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating application options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every structural problem found in the parsed options, reported as
    /// one aggregate.
    #[error("Invalid application options:\n\t{}", .0.join("\n\t"))]
    Validation(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
