use std::sync::LazyLock;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;

use super::errors::ImageError;

/// 5 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const RANDOM_SUFFIX_LEN: usize = 8;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("valid extension pattern"));

/// A file picked for upload, before any validation.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageUpload {
    /// Checks type and size. Never touches the network.
    pub fn validate(&self, max_bytes: usize) -> Result<(), ImageError> {
        let is_image = self
            .mime_type
            .trim()
            .to_ascii_lowercase()
            .strip_prefix("image/")
            .is_some_and(|subtype| !subtype.is_empty());
        if !is_image {
            return Err(ImageError::NotAnImage {
                mime_type: self.mime_type.clone(),
            });
        }
        if self.bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        if self.bytes.len() > max_bytes {
            return Err(ImageError::TooLarge {
                size: self.bytes.len(),
                max: max_bytes,
            });
        }
        Ok(())
    }
}

/// Object key inside the blob store: `<unix-millis>-<random>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn generate(file_name: &str, mime_type: &str) -> Self {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        Self(format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            suffix,
            extension_for(file_name, mime_type)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn extension_for(file_name: &str, mime_type: &str) -> String {
    if let Some((stem, ext)) = file_name.rsplit_once('.')
        && !stem.is_empty()
        && EXTENSION.is_match(ext)
    {
        return ext.to_ascii_lowercase();
    }

    let subtype = mime_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .map(|s| s.to_string());

    match subtype.as_deref() {
        Some("jpeg") => "jpg".to_string(),
        Some("svg+xml") => "svg".to_string(),
        Some(other) if EXTENSION.is_match(other) => other.to_string(),
        _ => "bin".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(mime: &str, size: usize) -> ImageUpload {
        ImageUpload {
            bytes: vec![0xAB; size],
            file_name: "tote.png".to_string(),
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn should_accept_image_within_limit() {
        assert!(upload("image/png", 1024).validate(DEFAULT_MAX_IMAGE_BYTES).is_ok());
        assert!(
            upload("image/jpeg", DEFAULT_MAX_IMAGE_BYTES)
                .validate(DEFAULT_MAX_IMAGE_BYTES)
                .is_ok()
        );
    }

    #[test]
    fn should_reject_non_image_mime_type() {
        let err = upload("application/pdf", 10)
            .validate(DEFAULT_MAX_IMAGE_BYTES)
            .unwrap_err();
        assert!(matches!(err, ImageError::NotAnImage { .. }));
        let err = upload("image/", 10).validate(DEFAULT_MAX_IMAGE_BYTES).unwrap_err();
        assert!(matches!(err, ImageError::NotAnImage { .. }));
    }

    #[test]
    fn should_reject_oversize_payload() {
        let err = upload("image/png", DEFAULT_MAX_IMAGE_BYTES + 1)
            .validate(DEFAULT_MAX_IMAGE_BYTES)
            .unwrap_err();
        assert!(matches!(err, ImageError::TooLarge { .. }));
    }

    #[test]
    fn should_reject_empty_payload() {
        let err = upload("image/png", 0).validate(DEFAULT_MAX_IMAGE_BYTES).unwrap_err();
        assert!(matches!(err, ImageError::Empty));
    }

    #[test]
    fn should_keep_original_extension_in_key() {
        let key = StorageKey::generate("Market Bag.JPG", "image/jpeg");
        let re = Regex::new(r"^\d+-[a-z0-9]{8}\.jpg$").unwrap();
        assert!(re.is_match(key.as_str()), "unexpected key {key}");
    }

    #[test]
    fn should_derive_extension_from_mime_when_file_name_has_none() {
        assert!(StorageKey::generate("photo", "image/jpeg").as_str().ends_with(".jpg"));
        assert!(StorageKey::generate(".hidden", "image/webp").as_str().ends_with(".webp"));
        assert!(StorageKey::generate("logo", "image/svg+xml").as_str().ends_with(".svg"));
        assert!(StorageKey::generate("x.t@r", "image/x-weird+").as_str().ends_with(".bin"));
    }

    #[test]
    fn should_generate_distinct_keys() {
        let a = StorageKey::generate("a.png", "image/png");
        let b = StorageKey::generate("a.png", "image/png");
        assert_ne!(a, b);
    }
}
