use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, ProductId};

/// Stored form of a product in the catalog file. Same field names as the
/// hosted table (`image_url`, `created_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl ProductRecord {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: ProductId::new(self.id),
            title: self.title,
            description: self.description,
            price: Price::new(self.price).map_err(|_| RepositoryError::InvalidRecord)?,
            image_url: self.image_url,
            created_at: self.created_at,
        })
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            image_url: product.image_url.clone(),
            created_at: product.created_at,
        }
    }
}
