use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use business::domain::errors::StorageError;
use business::domain::image::model::StorageKey;
use business::domain::image::storage::ImageStorage;

/// Keeps uploaded images in a directory and hands back `file://` URLs.
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn upload(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        _mime_type: &str,
    ) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            tracing::error!(root = %self.root.display(), error = %e, "Could not create image directory");
            StorageError::Io
        })?;

        let path = self.root.join(key.as_str());
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Could not store image");
            StorageError::Io
        })?;

        let absolute = std::path::absolute(&path).map_err(|_| StorageError::Io)?;
        Url::from_file_path(&absolute)
            .map(String::from)
            .map_err(|_| StorageError::InvalidResponse)
    }
}
