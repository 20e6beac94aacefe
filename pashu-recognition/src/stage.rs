// Recognition stage

use crate::{BreedClassifier, ImageInput, MockClassifier, RecognitionError, RecognitionResult, Result};
use pashu_log::{debug, info};
use std::sync::Arc;

/// Front door for recognition: checks the input, then delegates.
#[derive(Clone)]
pub struct RecognitionStage {
    classifier: Arc<dyn BreedClassifier>,
}

impl std::fmt::Debug for RecognitionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionStage").finish_non_exhaustive()
    }
}

impl Default for RecognitionStage {
    fn default() -> Self {
        Self::new(Arc::new(MockClassifier::default()))
    }
}

impl RecognitionStage {
    pub fn new(classifier: Arc<dyn BreedClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> Arc<dyn BreedClassifier> {
        Arc::clone(&self.classifier)
    }

    /// Missing or empty input is rejected without suspending.
    pub fn check_input(image: Option<&ImageInput>) -> Result<&ImageInput> {
        match image {
            Some(image) if !image.is_empty() => Ok(image),
            _ => {
                debug!(target: "pashu::recognition", "Submission rejected: no image");
                Err(RecognitionError::NoInput)
            }
        }
    }

    pub async fn submit(&self, image: Option<&ImageInput>) -> Result<RecognitionResult> {
        let image = Self::check_input(image)?;
        let result = self.classifier.classify(image).await?;
        info!(target: "pashu::recognition", "Identified {} ({})", result.breed, result.confidence);
        Ok(result)
    }
}
