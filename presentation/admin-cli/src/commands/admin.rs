use std::path::{Path, PathBuf};

use anyhow::Context;

use business::application::store::ProductStore;
use business::domain::image::errors::ImageError;
use business::domain::image::use_cases::upload::UploadImageParams;
use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ProductId;

use crate::ui::gallery::render_card;
use crate::ui::mime::mime_for_path;

/// Fields for a partial edit; `None` leaves the stored value alone.
#[derive(Debug, Default)]
pub struct ProductEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub image: Option<PathBuf>,
}

pub(crate) fn product_failure(error: ProductError) -> anyhow::Error {
    anyhow::anyhow!(error.user_message())
}

pub(crate) fn image_failure(error: ImageError) -> anyhow::Error {
    anyhow::anyhow!(error.user_message())
}

/// Reads a file and hands it to the store's upload path.
pub async fn upload_file(store: &ProductStore, path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    store
        .upload_image(UploadImageParams {
            bytes,
            file_name,
            mime_type: mime_for_path(path),
        })
        .await
        .map_err(image_failure)
}

/// Uploads `image` first when given; the product is only written with the returned URL.
async fn resolve_image(
    store: &ProductStore,
    image_url: Option<String>,
    image: Option<&Path>,
) -> anyhow::Result<Option<String>> {
    match image {
        Some(path) => Ok(Some(upload_file(store, path).await?)),
        None => Ok(image_url),
    }
}

pub async fn add(
    store: &ProductStore,
    title: String,
    description: String,
    price: String,
    image_url: Option<String>,
    image: Option<PathBuf>,
) -> anyhow::Result<()> {
    let image_url = resolve_image(store, image_url, image.as_deref())
        .await?
        .unwrap_or_default();

    let product = store
        .add(CreateProductParams {
            title,
            description,
            price,
            image_url,
        })
        .await
        .map_err(product_failure)?;

    println!("Added:\n{}", render_card(&product));
    Ok(())
}

pub async fn update(store: &ProductStore, id: String, edit: ProductEdit) -> anyhow::Result<()> {
    let image_url = resolve_image(store, edit.image_url, edit.image.as_deref()).await?;

    let product = store
        .update(UpdateProductParams {
            id: ProductId::new(id),
            title: edit.title,
            description: edit.description,
            price: edit.price,
            image_url,
        })
        .await
        .map_err(product_failure)?;

    println!("Updated:\n{}", render_card(&product));
    Ok(())
}

pub async fn delete(store: &ProductStore, id: String, yes: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("Deleting cannot be undone; pass --yes to confirm.");
    }

    store
        .remove(&ProductId::new(id.as_str()))
        .await
        .map_err(product_failure)?;

    println!("Deleted {}", id);
    Ok(())
}

pub async fn upload(store: &ProductStore, path: PathBuf) -> anyhow::Result<()> {
    let url = upload_file(store, &path).await?;
    println!("{}", url);
    Ok(())
}
