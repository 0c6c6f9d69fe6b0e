use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch, ProductPatchProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let patch = ProductPatch::parse(ProductPatchProps {
            title: params.title,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        })?;

        self.logger.debug(&format!(
            "Sending fields [{}] for product {}",
            patch.field_names().join(", "),
            params.id
        ));

        let product = self
            .repository
            .update(&params.id, &patch)
            .await
            .map_err(ProductError::Write)?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
