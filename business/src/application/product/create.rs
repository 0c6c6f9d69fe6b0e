use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        let new_product = NewProduct::parse(NewProductProps {
            title: params.title,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        })?;

        let product = self
            .repository
            .insert(&new_product)
            .await
            .map_err(ProductError::Write)?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
