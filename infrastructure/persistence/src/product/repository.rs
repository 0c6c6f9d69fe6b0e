use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductPatch};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::{PRODUCT_COLUMNS, ProductEntity, parse_id, price_to_numeric};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |e| {
        tracing::error!(operation, error = %e, "Product table request failed");
        RepositoryError::DatabaseError
    }
}

/// Builds an UPDATE that only names the columns present in the patch.
pub fn build_update_query(
    id: Uuid,
    patch: &ProductPatch,
) -> Result<QueryBuilder<'static, Postgres>, RepositoryError> {
    if patch.is_empty() {
        return Err(RepositoryError::Persistence);
    }

    let mut builder = QueryBuilder::new("UPDATE products SET ");
    {
        let mut fields = builder.separated(", ");
        if let Some(title) = &patch.title {
            fields.push("title = ");
            fields.push_bind_unseparated(title.clone());
        }
        if let Some(description) = &patch.description {
            fields.push("description = ");
            fields.push_bind_unseparated(description.clone());
        }
        if let Some(price) = patch.price {
            fields.push("price = ");
            fields.push_bind_unseparated(price_to_numeric(price)?);
        }
        if let Some(image_url) = &patch.image_url {
            fields.push("image_url = ");
            fields.push_bind_unseparated(image_url.clone());
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING ");
    builder.push(PRODUCT_COLUMNS);

    Ok(builder)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list_newest_first(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("list"))?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products (title, description, price, image_url) VALUES ($1, $2, $3, $4) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&product.title)
        .bind(&product.description)
        .bind(price_to_numeric(product.price)?)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("insert"))?;

        entity.into_domain()
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let mut builder = build_update_query(parse_id(id)?, patch)?;

        let entity = builder
            .build_query_as::<ProductEntity>()
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("update"))?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let uuid = parse_id(id)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete"))?;

        if result.rows_affected() == 0 {
            tracing::debug!(%id, "Delete matched no product");
        }
        Ok(())
    }
}
