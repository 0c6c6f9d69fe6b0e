use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Raw form input; every field is required.
#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
