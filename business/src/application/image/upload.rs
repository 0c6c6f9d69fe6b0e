use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::image::errors::ImageError;
use crate::domain::image::model::{DEFAULT_MAX_IMAGE_BYTES, ImageUpload, StorageKey};
use crate::domain::image::storage::ImageStorage;
use crate::domain::image::use_cases::upload::{UploadImageParams, UploadImageUseCase};
use crate::domain::logger::Logger;

pub struct UploadImageUseCaseImpl {
    pub storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
    pub max_bytes: usize,
}

impl UploadImageUseCaseImpl {
    pub fn new(storage: Arc<dyn ImageStorage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            storage,
            logger,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

#[async_trait]
impl UploadImageUseCase for UploadImageUseCaseImpl {
    async fn execute(&self, params: UploadImageParams) -> Result<String, ImageError> {
        let upload = ImageUpload {
            bytes: params.bytes,
            file_name: params.file_name,
            mime_type: params.mime_type,
        };
        upload.validate(self.max_bytes)?;

        let key = StorageKey::generate(&upload.file_name, &upload.mime_type);
        self.logger.info(&format!(
            "Uploading image {} ({} bytes) as {}",
            upload.file_name,
            upload.bytes.len(),
            key
        ));

        let url = self
            .storage
            .upload(&key, upload.bytes, &upload.mime_type)
            .await
            .map_err(ImageError::Upload)?;

        if url::Url::parse(&url).is_err() {
            self.logger
                .warn(&format!("Blob store returned an unusable URL for {}", key));
            return Err(ImageError::Upload(StorageError::InvalidResponse));
        }

        self.logger.info(&format!("Image available at {}", url));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Storage {}

        #[async_trait]
        impl ImageStorage for Storage {
            async fn upload(&self, key: &StorageKey, bytes: Vec<u8>, mime_type: &str) -> Result<String, StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(mime: &str, size: usize) -> UploadImageParams {
        UploadImageParams {
            bytes: vec![7; size],
            file_name: "cardigan.webp".to_string(),
            mime_type: mime.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_public_url_from_storage() {
        let mut storage = MockStorage::new();
        storage
            .expect_upload()
            .withf(|key, bytes, mime| {
                key.as_str().ends_with(".webp") && bytes.len() == 64 && mime.eq_ignore_ascii_case("image/webp")
            })
            .times(1)
            .returning(|key, _, _| Ok(format!("https://cdn.example.com/images/{}", key)));

        let use_case = UploadImageUseCaseImpl::new(Arc::new(storage), mock_logger());
        let url = use_case.execute(params("image/webp", 64)).await.unwrap();
        assert!(url.starts_with("https://cdn.example.com/images/"));
        assert!(url.ends_with(".webp"));
    }

    #[tokio::test]
    async fn should_not_call_storage_for_non_image() {
        let mut storage = MockStorage::new();
        storage.expect_upload().never();

        let use_case = UploadImageUseCaseImpl::new(Arc::new(storage), mock_logger());
        let err = use_case
            .execute(params("text/plain", 64))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageError::NotAnImage { .. }));
    }

    #[tokio::test]
    async fn should_not_call_storage_for_oversize_payload() {
        let mut storage = MockStorage::new();
        storage.expect_upload().never();

        let use_case =
            UploadImageUseCaseImpl::new(Arc::new(storage), mock_logger()).with_max_bytes(100);
        let err = use_case
            .execute(params("image/png", 101))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageError::TooLarge { size: 101, max: 100 }));
    }

    #[tokio::test]
    async fn should_report_upload_failure() {
        let mut storage = MockStorage::new();
        storage
            .expect_upload()
            .returning(|_, _, _| Err(StorageError::Rejected { status: 413 }));

        let use_case = UploadImageUseCaseImpl::new(Arc::new(storage), mock_logger());
        let err = use_case.execute(params("image/png", 10)).await.unwrap_err();
        assert!(matches!(
            err,
            ImageError::Upload(StorageError::Rejected { status: 413 })
        ));
    }

    #[tokio::test]
    async fn should_reject_unusable_url_from_storage() {
        let mut storage = MockStorage::new();
        storage
            .expect_upload()
            .returning(|_, _, _| Ok("not a url".to_string()));

        let use_case = UploadImageUseCaseImpl::new(Arc::new(storage), mock_logger());
        let err = use_case.execute(params("image/png", 10)).await.unwrap_err();
        assert!(matches!(
            err,
            ImageError::Upload(StorageError::InvalidResponse)
        ));
    }
}
