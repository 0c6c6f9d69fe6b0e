use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let mut products = self
            .repository
            .list_newest_first()
            .await
            .map_err(ProductError::Load)?;

        // Stable: ties keep the service's order.
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
