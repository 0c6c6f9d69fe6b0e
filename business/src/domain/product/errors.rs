use crate::domain::errors::{Interruption, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.price_missing")]
    PriceMissing,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.image_url_empty")]
    ImageUrlEmpty,
    #[error("product.image_url_invalid")]
    ImageUrlInvalid,
    #[error("product.nothing_to_update")]
    NothingToUpdate,
    #[error("product.load_failed")]
    Load(#[source] RepositoryError),
    #[error("product.write_failed")]
    Write(#[source] RepositoryError),
}

impl ProductError {
    /// Local validation failures never reach the remote service.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ProductError::Load(_) | ProductError::Write(_))
    }

    pub fn load_interrupted(interruption: Interruption) -> Self {
        ProductError::Load(interruption.into())
    }

    pub fn write_interrupted(interruption: Interruption) -> Self {
        ProductError::Write(interruption.into())
    }

    /// Message shown to the person operating the storefront.
    pub fn user_message(&self) -> String {
        match self {
            ProductError::TitleEmpty => "Please enter a product title.".to_string(),
            ProductError::DescriptionEmpty => "Please enter a product description.".to_string(),
            ProductError::PriceMissing => "Please enter a price.".to_string(),
            ProductError::PriceInvalid => {
                "The price must be a number from 0 to 9,999,999,999.99.".to_string()
            }
            ProductError::ImageUrlEmpty => "Please provide an image.".to_string(),
            ProductError::ImageUrlInvalid => "The image reference must be a full URL.".to_string(),
            ProductError::NothingToUpdate => "There are no changes to save.".to_string(),
            ProductError::Load(RepositoryError::Timeout) => {
                "Loading products timed out. Please check your connection and retry.".to_string()
            }
            ProductError::Load(_) => {
                "Failed to load products. Please check your connection and retry.".to_string()
            }
            ProductError::Write(RepositoryError::Timeout) => {
                "Saving timed out. Please try again.".to_string()
            }
            ProductError::Write(RepositoryError::Cancelled)
            | ProductError::Load(RepositoryError::Cancelled) => {
                "The request was cancelled.".to_string()
            }
            ProductError::Write(_) => "Failed to save changes. Please try again.".to_string(),
        }
    }
}
