//! Integration tests for pashu-recognition

use pashu_recognition::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_custom_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"[{"breed": "Tharparkar", "confidence": 81}]"#).unwrap();

    let catalog = RecognitionCatalog::from_path(&path).await.unwrap();
    let stage = RecognitionStage::new(Arc::new(MockClassifier::new(catalog)));

    let image = ImageInput::new(b"jpeg".to_vec());
    let result = stage.submit(Some(&image)).await.unwrap();
    assert_eq!(result.breed, "Tharparkar");
    assert_eq!(result.confidence, Confidence::new(81).unwrap());
    assert!(result.description.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_every_submission_yields_one_catalog_entry() {
    let classifier = Arc::new(MockClassifier::default().with_selection(Selection::Seeded(2024)));
    let stage = RecognitionStage::new(classifier.clone());
    let image = ImageInput::new(vec![1, 2, 3]).with_name("cow.jpg");

    for _ in 0..20 {
        let result = stage.submit(Some(&image)).await.unwrap();
        assert!(classifier.catalog().contains(&result));
    }
}

struct Failing;

#[async_trait::async_trait]
impl BreedClassifier for Failing {
    async fn classify(&self, _image: &ImageInput) -> Result<RecognitionResult> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Err(RecognitionError::ClassificationFailed("model offline".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_classifier_errors_propagate() {
    let stage = RecognitionStage::new(Arc::new(Failing));
    let err = stage.submit(Some(&ImageInput::new(vec![1]))).await.unwrap_err();

    assert_eq!(err.message_key(), "analysisFailed");
    assert!(err.to_string().contains("model offline"));
}
