//! Error types for i18n operations

use thiserror::Error;

/// Errors that can occur while loading or selecting languages.
///
/// Lookups themselves never fail: a missing key resolves to the key.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Failed to parse a message table
    #[error("Failed to parse message table: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
