// Error types for recognition

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognitionError {
    /// Submitted without an image, or with an empty one.
    #[error("No image selected")]
    NoInput,

    #[error("Confidence must be between 0 and 100, got {0}")]
    InvalidConfidence(u8),

    #[error("Recognition catalog is empty")]
    EmptyCatalog,

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    #[error("Classification failed: {0}")]
    ClassificationFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RecognitionError {
    /// Localization key of the message shown for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            RecognitionError::NoInput => "selectImageFirst",
            _ => "analysisFailed",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecognitionError>;
