//! Hosted backend client for catalog reads.
//!
//! The catalog lives in a hosted Postgres-over-REST service; products are
//! read with the public anon key and normalized into the canonical
//! [`Product`] shape on the way in. Responses are cached in-process for 5
//! minutes via `moka`. Writes never happen from the storefront - the admin
//! binary owns those.

mod cache;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use paraiso_core::{NormalizeError, Product, Slug, normalize_products};

use crate::config::BackendConfig;
use cache::{CacheKey, CacheValue};

/// Cached entries live this long before a re-fetch.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (network, DNS, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body (truncated).
        message: String,
    },

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A returned record failed normalization.
    #[error("malformed record: {0}")]
    Normalize(#[from] NormalizeError),
}

/// Client for the hosted catalog store.
///
/// Cheaply cloneable; all clones share one HTTP connection pool and one
/// response cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    http: reqwest::Client,
    /// `{SUPABASE_URL}/rest/v1`
    rest_endpoint: String,
    api_key: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                http: reqwest::Client::new(),
                rest_endpoint: format!("{}/rest/v1", config.url),
                api_key: config.api_key.clone(),
                cache,
            }),
        }
    }

    /// Fetch the full product list, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, non-success status,
    /// unparseable body, or a record that fails normalization. The caller
    /// decides whether to fall back.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Arc<Vec<Product>>, BackendError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("catalog list served from cache");
            return Ok(products);
        }

        let url = format!(
            "{}/products?select=*&order=created_at.desc",
            self.inner.rest_endpoint
        );
        let records = self.fetch_records(&url).await?;
        let products = Arc::new(normalize_products(&records)?);

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;

        Ok(products)
    }

    /// Fetch one product by slug.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport/API/parse/normalization
    /// failure. `Ok(None)` means the backend answered and has no such slug.
    #[instrument(skip(self))]
    pub async fn product_by_slug(&self, slug: &Slug) -> Result<Option<Product>, BackendError> {
        let key = CacheKey::Product(slug.clone());
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!(%slug, "product served from cache");
            return Ok(Some(Product::clone(&product)));
        }

        let url = format!(
            "{}/products?select=*&slug=eq.{}&limit=1",
            self.inner.rest_endpoint, slug
        );
        let records = self.fetch_records(&url).await?;
        let Some(record) = records.first() else {
            return Ok(None);
        };
        let product = paraiso_core::normalize_product(record)?;

        self.inner
            .cache
            .insert(key, CacheValue::Product(Arc::new(product.clone())))
            .await;

        Ok(Some(product))
    }

    /// Cheap reachability probe for the readiness endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend is unreachable or rejects
    /// the request.
    pub async fn ping(&self) -> Result<(), BackendError> {
        let url = format!("{}/products?select=id&limit=1", self.inner.rest_endpoint);
        self.fetch_records(&url).await.map(|_| ())
    }

    /// GET a PostgREST endpoint and return the raw row objects.
    async fn fetch_records(&self, url: &str) -> Result<Vec<serde_json::Value>, BackendError> {
        let response = self
            .inner
            .http
            .get(url)
            .header("apikey", &self.inner.api_key)
            .header("Authorization", format!("Bearer {}", self.inner.api_key))
            .send()
            .await?;

        let status = response.status();
        // Body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = BackendError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned 503: upstream unavailable");
    }

    #[test]
    fn client_strips_nothing_from_endpoint() {
        let client = CatalogClient::new(&BackendConfig {
            url: "https://example.supabase.co".to_string(),
            api_key: "anon".to_string(),
        });
        assert_eq!(
            client.inner.rest_endpoint,
            "https://example.supabase.co/rest/v1"
        );
    }
}
