// Image input

use crate::Result;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Opaque image bytes handed over by the image source.
///
/// Contents are never decoded or inspected; clones share the buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageInput {
    bytes: Arc<[u8]>,
    name: Option<String>,
}

impl ImageInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Read a file, naming the input after it.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let input = Self::new(bytes);

        Ok(match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => input.with_name(name),
            None => input,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageInput")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
