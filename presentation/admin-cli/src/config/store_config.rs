use std::env;
use std::time::Duration;

use business::application::store::DEFAULT_REQUEST_TIMEOUT;
use business::domain::image::model::DEFAULT_MAX_IMAGE_BYTES;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub request_timeout: Duration,
    pub max_image_bytes: usize,
}

impl StoreConfig {
    /// Environment variables:
    /// - REQUEST_TIMEOUT_SECS: per-request deadline (default: 30)
    /// - MAX_IMAGE_BYTES: largest accepted upload (default: 5242880)
    pub fn from_env() -> Self {
        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let max_image_bytes = env::var("MAX_IMAGE_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES);

        Self {
            request_timeout,
            max_image_bytes,
        }
    }
}
