use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::StorageKey;

/// The hosted blob store. Callers validate type and size beforehand.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores the bytes under `key` and returns a publicly readable URL.
    async fn upload(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<String, StorageError>;
}
