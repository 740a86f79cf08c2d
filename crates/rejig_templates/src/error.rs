//! Error types for template resolution and generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template resolution and project generation.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Qualified names hold at most one namespace separator.
    #[error("Invalid template name: {0}")]
    InvalidName(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unsupported source type for {0}")]
    UnsupportedSourceType(String),

    #[error("Path error for {path}: {message}")]
    Path { path: PathBuf, message: String },

    #[error("Failed fetching {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed rendering {path}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("Failed to parse {section} from manifest file: {source}")]
    ManifestParse {
        section: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid exclusion pattern '{pattern}': {source}")]
    Exclusion {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(#[from] rejig_config::ConfigError),
}
