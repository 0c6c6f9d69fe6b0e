//! Session-scoped product store.
//!
//! Owns the in-memory product list shown to the storefront and is the only
//! component that talks to the remote persistence service. Each mutation is
//! applied locally only after the service confirms it, straight from the
//! service's response, without re-fetching the whole list.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::domain::errors::Interruption;
use crate::domain::image::errors::ImageError;
use crate::domain::image::use_cases::upload::{UploadImageParams, UploadImageUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ProductStoreDeps {
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub create: Arc<dyn CreateProductUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
    pub upload_image: Arc<dyn UploadImageUseCase>,
    pub logger: Arc<dyn Logger>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Uninitialized,
    Loading,
    Ready,
}

/// Point-in-time copy of the store for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub phase: StorePhase,
}

#[derive(Debug, Default)]
struct StoreState {
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    loaded_once: bool,
}

impl StoreState {
    fn phase(&self) -> StorePhase {
        if self.loading {
            StorePhase::Loading
        } else if self.loaded_once {
            StorePhase::Ready
        } else {
            StorePhase::Uninitialized
        }
    }
}

pub struct ProductStore {
    get_all: Arc<dyn GetAllProductsUseCase>,
    create: Arc<dyn CreateProductUseCase>,
    update: Arc<dyn UpdateProductUseCase>,
    delete: Arc<dyn DeleteProductUseCase>,
    upload_image: Arc<dyn UploadImageUseCase>,
    logger: Arc<dyn Logger>,
    request_timeout: Duration,
    state: RwLock<StoreState>,
    cancel: Mutex<CancellationToken>,
}

impl ProductStore {
    fn new(deps: ProductStoreDeps) -> Self {
        Self {
            get_all: deps.get_all,
            create: deps.create,
            update: deps.update,
            delete: deps.delete,
            upload_image: deps.upload_image,
            logger: deps.logger,
            request_timeout: deps.request_timeout,
            state: RwLock::new(StoreState::default()),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Builds the store and performs its one automatic initial load.
    ///
    /// The store is returned even when that load fails; the failure is kept
    /// in [`ProductStore::last_error`] and [`ProductStore::refresh`] retries it.
    pub async fn open(deps: ProductStoreDeps) -> Arc<Self> {
        let store = Arc::new(Self::new(deps));
        if store.refresh().await.is_err() {
            store
                .logger
                .warn("Product store opened without products; refresh to retry");
        }
        store
    }

    /// Replaces the whole list with a fresh snapshot from the service.
    pub async fn refresh(&self) -> Result<(), ProductError> {
        {
            let mut state = self.write();
            state.loading = true;
            state.error = None;
        }

        let outcome = self
            .guarded(self.get_all.execute(), ProductError::load_interrupted)
            .await;

        let mut state = self.write();
        state.loading = false;
        state.loaded_once = true;
        match outcome {
            Ok(products) => {
                state.products = products;
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.user_message());
                drop(state);
                self.logger.failure("Loading products", &err);
                Err(err)
            }
        }
    }

    /// Inserts a product and prepends the service's record to the list.
    pub async fn add(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.begin_attempt();

        match self
            .guarded(self.create.execute(params), ProductError::write_interrupted)
            .await
        {
            Ok(product) => {
                self.write().products.insert(0, product.clone());
                Ok(product)
            }
            Err(err) => {
                self.record_failure("Adding product", &err, err.user_message());
                Err(err)
            }
        }
    }

    /// Sends the supplied fields and replaces the local record with the
    /// service's full representation.
    pub async fn update(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.begin_attempt();
        let requested = params.id.clone();

        match self
            .guarded(self.update.execute(params), ProductError::write_interrupted)
            .await
        {
            Ok(product) => {
                let replaced = {
                    let mut state = self.write();
                    match state.products.iter_mut().find(|p| p.id == product.id) {
                        Some(slot) => {
                            *slot = product.clone();
                            true
                        }
                        None => false,
                    }
                };
                if !replaced {
                    self.logger.warn(&format!(
                        "Updated product {} is not in the local list; refresh to see it",
                        requested
                    ));
                }
                Ok(product)
            }
            Err(err) => {
                self.record_failure("Updating product", &err, err.user_message());
                Err(err)
            }
        }
    }

    /// Deletes a product. No confirmation happens here: one call, one delete.
    pub async fn remove(&self, id: &ProductId) -> Result<(), ProductError> {
        self.begin_attempt();

        let params = DeleteProductParams { id: id.clone() };
        match self
            .guarded(self.delete.execute(params), ProductError::write_interrupted)
            .await
        {
            Ok(()) => {
                self.write().products.retain(|p| &p.id != id);
                Ok(())
            }
            Err(err) => {
                self.record_failure("Deleting product", &err, err.user_message());
                Err(err)
            }
        }
    }

    /// Uploads an image and returns its public URL for use in `add`/`update`.
    pub async fn upload_image(&self, params: UploadImageParams) -> Result<String, ImageError> {
        self.begin_attempt();

        match self
            .guarded(self.upload_image.execute(params), ImageError::interrupted)
            .await
        {
            Ok(url) => Ok(url),
            Err(err) => {
                self.record_failure("Uploading image", &err, err.user_message());
                Err(err)
            }
        }
    }

    /// Aborts every call currently waiting on the network. Their effects are
    /// never applied. Calls started afterwards are unaffected.
    pub fn cancel_in_flight(&self) {
        let mut token = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
        token.cancel();
        *token = CancellationToken::new();
        self.logger.info("Cancelled in-flight product requests");
    }

    pub fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn find(&self, id: &ProductId) -> Option<Product> {
        self.read().products.iter().find(|p| &p.id == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn phase(&self) -> StorePhase {
        self.read().phase()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.read();
        StoreSnapshot {
            products: state.products.clone(),
            loading: state.loading,
            error: state.error.clone(),
            phase: state.phase(),
        }
    }

    async fn guarded<T, E, F>(&self, operation: F, interrupted: fn(Interruption) -> E) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let token = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        tokio::select! {
            _ = token.cancelled() => Err(interrupted(Interruption::Cancelled)),
            outcome = tokio::time::timeout(self.request_timeout, operation) => match outcome {
                Ok(result) => result,
                Err(_) => Err(interrupted(Interruption::Timeout)),
            },
        }
    }

    fn begin_attempt(&self) {
        self.write().error = None;
    }

    fn record_failure(&self, operation: &str, err: &dyn std::fmt::Display, message: String) {
        self.write().error = Some(message);
        self.logger.failure(operation, err);
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
