use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::errors::StorageError;
use business::domain::image::model::StorageKey;
use business::domain::image::storage::ImageStorage;

use crate::client::SupabaseClient;

/// Error payload returned by the storage API on a rejected request.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn rejection_reason(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| body.trim().to_string())
}

pub struct SupabaseImageStorage {
    client: SupabaseClient,
}

impl SupabaseImageStorage {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// A 2xx answer yields the object's public URL; anything else is a rejection.
    fn upload_outcome(
        &self,
        key: &StorageKey,
        status: StatusCode,
        body: &str,
    ) -> Result<String, StorageError> {
        if !status.is_success() {
            tracing::error!(
                key = %key,
                status = status.as_u16(),
                reason = %rejection_reason(body),
                "Image upload rejected"
            );
            return Err(StorageError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(self.client.public_url(key.as_str()))
    }
}

#[async_trait]
impl ImageStorage for SupabaseImageStorage {
    async fn upload(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<String, StorageError> {
        let response = self
            .client
            .client
            .post(self.client.object_url(key.as_str()))
            .header("Authorization", self.client.auth_header())
            .header("apikey", &self.client.api_key)
            .header("Content-Type", mime_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "Image upload request failed");
                if e.is_timeout() {
                    StorageError::Timeout
                } else {
                    StorageError::Network
                }
            })?;

        let status = response.status();
        let body = if status.is_success() {
            String::new()
        } else {
            response.text().await.unwrap_or_default()
        };
        self.upload_outcome(key, status, &body)
    }
}
