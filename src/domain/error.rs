use std::io;

use thiserror::Error;

/// Library-wide error type for issuekit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required input file is absent.
    #[error("Input file not found: {0}")]
    MissingFile(String),

    /// Configuration file content is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// User input or generated content failed validation.
    #[error("{0}")]
    Validation(String),

    /// Path escapes the repository root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// External command-line tool failed.
    #[error("{tool} error: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Template registration or rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn external_tool<S: Into<String>>(tool: &str, error: S) -> Self {
        AppError::ExternalToolError { tool: tool.to_string(), error: error.into() }
    }
}
