use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::{Price, ProductId};

/// A committed listing, as returned by the remote persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Validated insert payload. The service assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
}

pub struct NewProductProps {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl NewProduct {
    pub fn parse(props: NewProductProps) -> Result<Self, ProductError> {
        Ok(Self {
            title: required_text(props.title, ProductError::TitleEmpty)?,
            description: required_text(props.description, ProductError::DescriptionEmpty)?,
            price: Price::parse(&props.price)?,
            image_url: image_reference(props.image_url)?,
        })
    }
}

/// Subset of fields to change. Absent fields stay untouched server-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatchProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    pub fn parse(props: ProductPatchProps) -> Result<Self, ProductError> {
        let patch = Self {
            title: props
                .title
                .map(|t| required_text(t, ProductError::TitleEmpty))
                .transpose()?,
            description: props
                .description
                .map(|d| required_text(d, ProductError::DescriptionEmpty))
                .transpose()?,
            price: props.price.map(|p| Price::parse(&p)).transpose()?,
            image_url: props.image_url.map(image_reference).transpose()?,
        };

        if patch.is_empty() {
            return Err(ProductError::NothingToUpdate);
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
    }

    /// Names of the fields this patch carries, in column order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(4);
        if self.title.is_some() {
            names.push("title");
        }
        if self.description.is_some() {
            names.push("description");
        }
        if self.price.is_some() {
            names.push("price");
        }
        if self.image_url.is_some() {
            names.push("image_url");
        }
        names
    }
}

fn required_text(value: String, missing: ProductError) -> Result<String, ProductError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_string())
}

fn image_reference(value: String) -> Result<String, ProductError> {
    let trimmed = required_text(value, ProductError::ImageUrlEmpty)?;
    url::Url::parse(&trimmed).map_err(|_| ProductError::ImageUrlInvalid)?;
    Ok(trimmed)
}
