// Error types for authentication

use pashu_validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credential shape: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl AuthError {
    /// Localization key of the message shown for this failure.
    pub fn message_key(&self) -> &str {
        match self {
            AuthError::Validation(e) => e.message_key.as_deref().unwrap_or("loginError"),
            _ => "loginError",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
