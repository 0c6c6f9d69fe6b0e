use std::sync::Arc;

use logger::TracingLogger;
use persistence::local::repository::ProductRepositoryJson;
use persistence::product::repository::ProductRepositoryPostgres;

use storage::client::SupabaseClient;
use storage::local_storage::LocalImageStorage;
use storage::supabase_storage::SupabaseImageStorage;

use business::application::image::upload::UploadImageUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::store::{ProductStore, ProductStoreDeps};
use business::domain::image::storage::ImageStorage;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::config::app_config::AppConfig;
use crate::config::backend_config::Backend;
use crate::config::database_config;

pub struct DependencyContainer {
    pub store: Arc<ProductStore>,
}

impl DependencyContainer {
    /// Wires adapters and use cases, then opens the store (which loads the catalog once).
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository: Arc<dyn ProductRepository> = match config.backend {
            Backend::Postgres => {
                let pool = database_config::init_database().await?;
                Arc::new(ProductRepositoryPostgres::new(pool))
            }
            Backend::Local => Arc::new(ProductRepositoryJson::new(config.local.catalog_path())),
        };

        let image_storage: Arc<dyn ImageStorage> = match &config.supabase {
            Some(supabase) => {
                let client = SupabaseClient::with_timeout(
                    supabase.url.clone(),
                    supabase.anon_key.clone(),
                    config.store.request_timeout,
                )
                .with_bucket(supabase.bucket.clone());
                Arc::new(SupabaseImageStorage::new(client))
            }
            None => Arc::new(LocalImageStorage::new(config.local.images_dir())),
        };

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Image use cases
        let upload_image_use_case = Arc::new(
            UploadImageUseCaseImpl::new(image_storage, logger.clone())
                .with_max_bytes(config.store.max_image_bytes),
        );

        let store = ProductStore::open(ProductStoreDeps {
            get_all: get_all_use_case,
            create: create_use_case,
            update: update_use_case,
            delete: delete_use_case,
            upload_image: upload_image_use_case,
            logger,
            request_timeout: config.store.request_timeout,
        })
        .await;

        Ok(Self { store })
    }
}
