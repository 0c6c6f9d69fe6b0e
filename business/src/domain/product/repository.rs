use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductPatch};
use super::value_objects::ProductId;

/// The hosted product table.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Full snapshot, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Returns the committed record with its service-assigned id and timestamp.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Sends only the patch's fields and returns the full updated record.
    async fn update(&self, id: &ProductId, patch: &ProductPatch)
    -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
