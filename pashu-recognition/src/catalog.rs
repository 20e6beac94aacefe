//! Recognition results and the breed catalog
//!
//! The mock classifier never looks at the image; it draws one entry from a
//! fixed catalog. Confidences are whole percentages in `0..=100`.

use crate::{RecognitionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A whole-number percentage, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Result<Self> {
        if percent > Self::MAX {
            return Err(RecognitionError::InvalidConfidence(percent));
        }
        Ok(Self(percent))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Confidence {
    type Error = RecognitionError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One identified breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub breed: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecognitionResult {
    pub fn new(breed: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            breed: breed.into(),
            confidence,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Non-empty list of results the mock classifier draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecognitionCatalog {
    entries: Vec<RecognitionResult>,
}

impl RecognitionCatalog {
    pub fn new(entries: Vec<RecognitionResult>) -> Result<Self> {
        if entries.is_empty() {
            return Err(RecognitionError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{breed, confidence, description?}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    pub fn entries(&self) -> &[RecognitionResult] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&RecognitionResult> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, result: &RecognitionResult) -> bool {
        self.entries.contains(result)
    }
}

impl Default for RecognitionCatalog {
    fn default() -> Self {
        let entry = |breed: &str, confidence: u8, description: &str| {
            RecognitionResult::new(breed, Confidence(confidence)).with_description(description)
        };

        Self {
            entries: vec![
                entry("Gir Cow", 92, "Indigenous Indian breed known for high milk quality"),
                entry("Murrah Buffalo", 88, "Premier buffalo breed of India"),
                entry("Holstein Friesian", 85, "High milk producing dairy breed"),
                entry("Sahiwal Cow", 90, "Heat tolerant zebu breed"),
                entry("Jersey Cow", 87, "Small but efficient dairy breed"),
            ],
        }
    }
}
