// Error types for the navigation flow

use crate::{PendingKind, Screen};
use pashu_i18n::I18nError;
use pashu_validation::ValidationError;
use thiserror::Error;

/// Reasons a command was refused. None of these mutate session or
/// navigation state.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid credential: {0}")]
    Validation(#[from] ValidationError),

    #[error("No image selected")]
    NoImage,

    #[error("A {0} request is already pending")]
    Busy(PendingKind),

    #[error("`{command}` is not available on the {screen} screen")]
    InvalidTransition {
        command: &'static str,
        screen: Screen,
    },

    #[error(transparent)]
    Language(#[from] I18nError),
}

impl FlowError {
    /// Localization key of the message shown for this failure, if any.
    pub fn message_key(&self) -> Option<&str> {
        match self {
            FlowError::Validation(e) => e.message_key.as_deref(),
            FlowError::NoImage => Some("selectImageFirst"),
            FlowError::Busy(_) => Some("operationPending"),
            FlowError::InvalidTransition { .. } | FlowError::Language(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
