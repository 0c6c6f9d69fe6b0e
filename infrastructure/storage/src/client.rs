use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BUCKET: &str = "product-images";

/// Shared Supabase Storage HTTP client configuration.
pub struct SupabaseClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub bucket: String,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_timeout(base_url, api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: String, api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Upload endpoint for one object.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    /// Publicly reachable address of an uploaded object.
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_object_and_public_urls() {
        let client = SupabaseClient::new(
            "https://abc.supabase.co/".to_string(),
            "anon".to_string(),
        );

        assert_eq!(
            client.object_url("1717243200000-ab12cd34.png"),
            "https://abc.supabase.co/storage/v1/object/product-images/1717243200000-ab12cd34.png"
        );
        assert_eq!(
            client.public_url("1717243200000-ab12cd34.png"),
            "https://abc.supabase.co/storage/v1/object/public/product-images/1717243200000-ab12cd34.png"
        );
    }

    #[test]
    fn should_use_custom_bucket() {
        let client = SupabaseClient::new("https://abc.supabase.co".to_string(), "anon".to_string())
            .with_bucket("shop");

        assert_eq!(
            client.public_url("a.jpg"),
            "https://abc.supabase.co/storage/v1/object/public/shop/a.jpg"
        );
        assert_eq!(client.auth_header(), "Bearer anon");
    }
}
