// Breed classifiers

use crate::{ImageInput, RecognitionCatalog, RecognitionResult, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use pashu_log::{Level, event};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;

/// Identifies the breed shown in an image.
#[async_trait]
pub trait BreedClassifier: Send + Sync {
    async fn classify(&self, image: &ImageInput) -> Result<RecognitionResult>;
}

/// How the mock classifier picks a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniform over the catalog, thread-local RNG.
    #[default]
    Random,
    /// Uniform over the catalog, reproducible sequence.
    Seeded(u64),
    /// Always the same entry; wraps around the catalog length.
    Fixed(usize),
}

enum Picker {
    Random,
    Seeded(Mutex<StdRng>),
    Fixed(usize),
}

impl Picker {
    fn pick(&self, len: usize) -> usize {
        match self {
            Picker::Random => rand::rng().random_range(0..len),
            Picker::Seeded(rng) => rng.lock().random_range(0..len),
            Picker::Fixed(index) => index % len,
        }
    }
}

impl From<Selection> for Picker {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Random => Picker::Random,
            Selection::Seeded(seed) => Picker::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            Selection::Fixed(index) => Picker::Fixed(index),
        }
    }
}

/// Waits a fixed delay, then returns a catalog entry regardless of the image.
pub struct MockClassifier {
    catalog: Arc<RecognitionCatalog>,
    delay: Duration,
    selection: Selection,
    picker: Picker,
}

impl std::fmt::Debug for MockClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockClassifier")
            .field("catalog_len", &self.catalog.len())
            .field("delay", &self.delay)
            .field("selection", &self.selection)
            .finish()
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(RecognitionCatalog::default())
    }
}

impl MockClassifier {
    pub fn new(catalog: RecognitionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            delay: Duration::from_millis(3000),
            selection: Selection::Random,
            picker: Picker::Random,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self.picker = selection.into();
        self
    }

    pub fn catalog(&self) -> &RecognitionCatalog {
        &self.catalog
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl BreedClassifier for MockClassifier {
    async fn classify(&self, image: &ImageInput) -> Result<RecognitionResult> {
        tokio::time::sleep(self.delay).await;

        let index = self.picker.pick(self.catalog.len());
        let result = self.catalog.entries()[index].clone();

        event!(Level::Debug, target: "pashu::recognition", "classified",
            image = image.name().unwrap_or("<unnamed>"),
            bytes = image.len(),
            breed = result.breed,
            confidence = result.confidence);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn image() -> ImageInput {
        ImageInput::new(vec![1, 2, 3])
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_default_delay() {
        let classifier = MockClassifier::default();
        let start = Instant::now();

        let result = classifier.classify(&image()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(classifier.catalog().contains(&result));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_selection_wraps() {
        let classifier = MockClassifier::default().with_selection(Selection::Fixed(6));
        let result = classifier.classify(&image()).await.unwrap();
        assert_eq!(result.breed, "Murrah Buffalo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_is_reproducible() {
        let a = MockClassifier::default().with_selection(Selection::Seeded(7));
        let b = MockClassifier::default().with_selection(Selection::Seeded(7));

        for _ in 0..10 {
            assert_eq!(
                a.classify(&image()).await.unwrap(),
                b.classify(&image()).await.unwrap()
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_always_from_catalog() {
        let classifier = MockClassifier::default().with_delay(Duration::ZERO);
        for _ in 0..50 {
            let result = classifier.classify(&image()).await.unwrap();
            assert!(classifier.catalog().contains(&result));
            assert!(result.confidence.value() <= 100);
        }
    }

    #[test]
    fn test_picker_range() {
        let picker: Picker = Selection::Seeded(1).into();
        for _ in 0..100 {
            assert!(picker.pick(5) < 5);
        }
        assert_eq!(Picker::from(Selection::Fixed(3)).pick(5), 3);
    }
}
