use crate::domain::errors::{Interruption, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.not_an_image")]
    NotAnImage { mime_type: String },
    #[error("image.empty")]
    Empty,
    #[error("image.too_large")]
    TooLarge { size: usize, max: usize },
    #[error("image.upload_failed")]
    Upload(#[source] StorageError),
}

impl ImageError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, ImageError::Upload(_))
    }

    pub fn interrupted(interruption: Interruption) -> Self {
        ImageError::Upload(interruption.into())
    }

    pub fn user_message(&self) -> String {
        match self {
            ImageError::NotAnImage { mime_type } => {
                format!("Only image files can be uploaded (got {}).", mime_type)
            }
            ImageError::Empty => "The selected file is empty.".to_string(),
            ImageError::TooLarge { max, .. } => format!(
                "The image is too large. The limit is {} MB.",
                max / (1024 * 1024)
            ),
            ImageError::Upload(StorageError::Timeout) => {
                "The image upload timed out. Please try again.".to_string()
            }
            ImageError::Upload(StorageError::Cancelled) => "The upload was cancelled.".to_string(),
            ImageError::Upload(_) => "Failed to upload the image. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_limit_in_megabytes() {
        let err = ImageError::TooLarge {
            size: 6 * 1024 * 1024,
            max: 5 * 1024 * 1024,
        };
        assert!(err.user_message().contains("5 MB"));
        assert!(err.is_validation());
    }

    #[test]
    fn should_not_treat_upload_failure_as_validation() {
        assert!(!ImageError::Upload(StorageError::Network).is_validation());
        assert_eq!(
            ImageError::interrupted(Interruption::Timeout).to_string(),
            "image.upload_failed"
        );
    }
}
