//! Mock breed recognition for P.A.S.H.U.
//!
//! A [`RecognitionStage`] accepts an optional [`ImageInput`], rejects missing
//! input at once, and otherwise asks a pluggable [`BreedClassifier`]. The
//! bundled [`MockClassifier`] ignores the image, waits, and draws from a
//! [`RecognitionCatalog`].
//!
//! ```
//! use pashu_recognition::{ImageInput, MockClassifier, RecognitionStage, Selection};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let classifier = MockClassifier::default()
//!     .with_delay(Duration::ZERO)
//!     .with_selection(Selection::Fixed(0));
//! let stage = RecognitionStage::new(Arc::new(classifier));
//!
//! let result = stage.submit(Some(&ImageInput::new(vec![0xff]))).await.unwrap();
//! assert_eq!(result.breed, "Gir Cow");
//! assert!(stage.submit(None).await.is_err());
//! # }
//! ```

mod catalog;
mod classifier;
mod error;
mod image;
mod stage;

pub use catalog::{Confidence, RecognitionCatalog, RecognitionResult};
pub use classifier::{BreedClassifier, MockClassifier, Selection};
pub use error::{RecognitionError, Result};
pub use image::ImageInput;
pub use stage::RecognitionStage;
