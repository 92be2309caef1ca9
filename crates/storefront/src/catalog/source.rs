//! Catalog reads with fallback.
//!
//! Read errors are never surfaced to the shopper: any failure - network,
//! API, parse, or normalization - substitutes the built-in fallback
//! catalog and logs what happened. Recovery is manual (the next request
//! simply tries again); nothing here retries.

use std::sync::Arc;

use tracing::warn;

use paraiso_core::{Product, Slug, fallback_products};

use crate::backend::CatalogClient;

/// The storefront's only way to obtain products.
#[derive(Clone)]
pub struct CatalogSource {
    client: CatalogClient,
}

impl CatalogSource {
    /// Wrap a backend client.
    #[must_use]
    pub const fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// The full product list: the backend's when it answers with a clean
    /// list, the static fallback otherwise.
    pub async fn products(&self) -> Arc<Vec<Product>> {
        match self.client.list_products().await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "catalog read failed, serving fallback products");
                Arc::new(fallback_products())
            }
        }
    }

    /// One product by slug. A backend failure falls back to the static
    /// list; `None` means nobody has that slug.
    pub async fn product_by_slug(&self, slug: &Slug) -> Option<Product> {
        match self.client.product_by_slug(slug).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, %slug, "product read failed, checking fallback products");
                fallback_products().into_iter().find(|p| p.slug == *slug)
            }
        }
    }

    /// Whether the backend currently answers reads.
    pub async fn is_ready(&self) -> bool {
        self.client.ping().await.is_ok()
    }
}
