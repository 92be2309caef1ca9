//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::CatalogClient;
use crate::cart::{CartStore, FileStore};
use crate::catalog::CatalogSource;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart store sits behind a mutex so its
/// transitions are serialized - one logical shopper session per process,
/// mutations run to completion, exactly the single-tab model the store
/// has always assumed.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogSource,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create the application state: build the backend client and load
    /// the persisted cart/theme (one synchronous read, no network).
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogSource::new(CatalogClient::new(&config.backend));
        let cart = CartStore::load(Box::new(FileStore::new(config.data_dir.clone())));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog source.
    #[must_use]
    pub fn catalog(&self) -> &CatalogSource {
        &self.inner.catalog
    }

    /// Lock the cart store for a mutation or read.
    ///
    /// A poisoned lock is recovered: the store's invariants hold after
    /// every individual mutation, so the state a panicking thread left
    /// behind is still consistent.
    #[must_use]
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
