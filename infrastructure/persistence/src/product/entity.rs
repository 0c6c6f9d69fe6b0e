use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, ProductId};

/// Row of the `products` table, in the table's snake_case naming.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

pub const PRODUCT_COLUMNS: &str = "id, title, description, price, image_url, created_at";

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let amount = self.price.to_f64().ok_or(RepositoryError::InvalidRecord)?;
        let price = Price::new(amount).map_err(|_| RepositoryError::InvalidRecord)?;

        Ok(Product {
            id: ProductId::new(self.id.to_string()),
            title: self.title,
            description: self.description,
            price,
            image_url: self.image_url,
            created_at: self.created_at,
        })
    }
}

/// NUMERIC(12, 2) value for a price.
pub fn price_to_numeric(price: Price) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price.amount())
        .map(|d| d.round(2))
        .ok_or(RepositoryError::InvalidRecord)
}

/// Ids issued by this table are UUIDs; anything else cannot name a row.
pub fn parse_id(id: &ProductId) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(id.as_str()).map_err(|_| RepositoryError::NotFound)
}
