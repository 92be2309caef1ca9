//! Application state shared across admin handlers.

use std::sync::Arc;

use crate::backend::CatalogAdminClient;
use crate::config::AdminConfig;
use crate::services::auth::AuthService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: CatalogAdminClient,
    auth: AuthService,
}

impl AppState {
    /// Create the application state from configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let catalog = CatalogAdminClient::new(&config.backend);
        let auth = AuthService::new(&config.backend);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                auth,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog admin client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogAdminClient {
        &self.inner.catalog
    }

    /// Get a reference to the auth service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }
}
