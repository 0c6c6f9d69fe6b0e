use async_trait::async_trait;

use crate::domain::image::errors::ImageError;

pub struct UploadImageParams {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    /// Returns the public URL of the stored image.
    async fn execute(&self, params: UploadImageParams) -> Result<String, ImageError>;
}
