//! Error types for the pashu CLI.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// IO error (files, terminal prompts)
    Io(std::io::Error),

    /// Configuration could not be loaded or is invalid
    Config(String),

    /// The flow refused a command
    Flow(String),

    /// Locale tables could not be loaded
    Locale(String),

    /// Recognition catalog or image error
    Recognition(String),

    /// Invalid argument
    InvalidArgument(String),

    /// A script line could not be parsed or did not hold
    Script { line: usize, message: String },

    /// A check found problems
    Validation(String),

    /// Output could not be serialized
    Serialization(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Flow(msg) => write!(f, "Flow error: {}", msg),
            CliError::Locale(msg) => write!(f, "Locale error: {}", msg),
            CliError::Recognition(msg) => write!(f, "Recognition error: {}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Script { line, message } => write!(f, "Script line {}: {}", line, message),
            CliError::Validation(msg) => write!(f, "Validation error: {}", msg),
            CliError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Io(e.into())
    }
}

impl From<pashu_config::ConfigError> for CliError {
    fn from(e: pashu_config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<pashu_core::FlowError> for CliError {
    fn from(e: pashu_core::FlowError) -> Self {
        CliError::Flow(e.to_string())
    }
}

impl From<pashu_i18n::I18nError> for CliError {
    fn from(e: pashu_i18n::I18nError) -> Self {
        CliError::Locale(e.to_string())
    }
}

impl From<pashu_recognition::RecognitionError> for CliError {
    fn from(e: pashu_recognition::RecognitionError) -> Self {
        CliError::Recognition(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(e: toml::ser::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
