use std::env;
use std::path::PathBuf;

/// File locations for running without hosted services.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    pub data_dir: PathBuf,
}

impl LocalConfig {
    /// Environment variables:
    /// - LOCAL_DATA_DIR: directory for the catalog file and images (default: "./data")
    pub fn from_env() -> Self {
        let data_dir = env::var("LOCAL_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_place_catalog_and_images_under_data_dir() {
        let config = LocalConfig {
            data_dir: PathBuf::from("/srv/shop"),
        };

        assert_eq!(config.catalog_path(), PathBuf::from("/srv/shop/products.json"));
        assert_eq!(config.images_dir(), PathBuf::from("/srv/shop/images"));
    }
}
