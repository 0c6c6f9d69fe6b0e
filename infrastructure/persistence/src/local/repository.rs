use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductPatch};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::record::ProductRecord;
use super::seed::starter_catalog;

/// Product catalog kept in a single JSON file.
///
/// Plays the part of the remote service for offline use: it assigns ids and
/// creation timestamps itself. A missing or unreadable file is replaced by
/// the starter catalog.
pub struct ProductRepositoryJson {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ProductRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Seeding new product catalog");
                return self.reseed().await;
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Could not read product catalog");
                return Err(RepositoryError::Persistence);
            }
        };

        match serde_json::from_slice::<Vec<ProductRecord>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Product catalog is corrupt; restoring the starter catalog"
                );
                self.reseed().await
            }
        }
    }

    async fn reseed(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let records = starter_catalog();
        self.save(&records).await?;
        Ok(records)
    }

    /// Writes to a sibling temp file, then renames over the catalog.
    async fn save(&self, records: &[ProductRecord]) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(records).map_err(|_| RepositoryError::Persistence)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| RepositoryError::Persistence)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(|e| {
            tracing::error!(path = %tmp.display(), error = %e, "Could not write product catalog");
            RepositoryError::Persistence
        })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|_| RepositoryError::Persistence)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn list_newest_first(&self) -> Result<Vec<Product>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut products = self
            .load()
            .await?
            .into_iter()
            .map(ProductRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = ProductRecord {
            id: Uuid::new_v4().to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            image_url: product.image_url.clone(),
            created_at: Utc::now(),
        };
        records.insert(0, record.clone());
        self.save(&records).await?;

        record.into_domain()
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = records
            .iter_mut()
            .find(|r| r.id == id.as_str())
            .ok_or(RepositoryError::NotFound)?;

        if let Some(title) = &patch.title {
            record.title = title.clone();
        }
        if let Some(description) = &patch.description {
            record.description = description.clone();
        }
        if let Some(price) = patch.price {
            record.price = price.amount();
        }
        if let Some(image_url) = &patch.image_url {
            record.image_url = image_url.clone();
        }
        let updated = record.clone();

        self.save(&records).await?;
        updated.into_domain()
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let before = records.len();
        records.retain(|r| r.id != id.as_str());
        if records.len() == before {
            tracing::debug!(%id, "Delete matched no product");
            return Ok(());
        }

        self.save(&records).await
    }
}
