//! Hosted backend client for catalog administration.
//!
//! Same catalog store the storefront reads, accessed with the privileged
//! service-role key. Reads are uncached - the operator is editing and
//! wants fresh rows. Write failures keep the raw backend detail: they are
//! surfaced verbatim to the operator, the operation aborts, and no
//! partial state is applied (the backend either applies a row change or
//! rejects it).

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use paraiso_core::{NormalizeError, Product, ProductId, normalize_products};

use crate::config::AdminBackendConfig;

/// Errors that can occur when administering the catalog.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (network, DNS, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the operation. The raw body is kept: this is
    /// what the operator sees.
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

/// A product row as the backend stores it, for create/update calls.
///
/// Column names are the backend's, not the canonical record's; this is
/// the one place the two shapes meet on the write path.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub slug: String,
    pub name_es: String,
    pub description_es: Option<String>,
    pub price_ars: i64,
    pub image_url: String,
    pub category: String,
    pub material: Option<String>,
    pub stock: i64,
    pub rating: f64,
    pub featured: bool,
    pub in_stock: bool,
}

/// Client for catalog writes (and operator-facing reads).
#[derive(Clone)]
pub struct CatalogAdminClient {
    inner: Arc<CatalogAdminClientInner>,
}

struct CatalogAdminClientInner {
    http: reqwest::Client,
    /// `{SUPABASE_URL}/rest/v1/products`
    products_endpoint: String,
    service_role_key: String,
}

impl CatalogAdminClient {
    /// Create a new admin catalog client.
    #[must_use]
    pub fn new(config: &AdminBackendConfig) -> Self {
        Self {
            inner: Arc::new(CatalogAdminClientInner {
                http: reqwest::Client::new(),
                products_endpoint: format!("{}/rest/v1/products", config.url),
                service_role_key: config.service_role_key.expose_secret().to_string(),
            }),
        }
    }

    /// Fetch all products, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport/API/parse/normalization
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        let url = format!(
            "{}?select=*&order=created_at.desc",
            self.inner.products_endpoint
        );
        let response = self
            .inner
            .http
            .get(&url)
            .header("apikey", &self.inner.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.inner.service_role_key),
            )
            .send()
            .await?;

        let body = Self::require_success(response).await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(normalize_products(&records)?)
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] with the raw backend detail on rejection.
    #[instrument(skip(self, record), fields(slug = %record.slug))]
    pub async fn create_product(&self, record: &ProductRecord) -> Result<(), BackendError> {
        let response = self
            .inner
            .http
            .post(&self.inner.products_endpoint)
            .header("apikey", &self.inner.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.inner.service_role_key),
            )
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        Self::require_success(response).await.map(|_| ())
    }

    /// Update the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] with the raw backend detail on rejection.
    #[instrument(skip(self, record), fields(slug = %record.slug))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        record: &ProductRecord,
    ) -> Result<(), BackendError> {
        let url = self.row_url(id);
        let response = self
            .inner
            .http
            .patch(&url)
            .header("apikey", &self.inner.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.inner.service_role_key),
            )
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        Self::require_success(response).await.map(|_| ())
    }

    /// Delete the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] with the raw backend detail on rejection.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), BackendError> {
        let url = self.row_url(id);
        let response = self
            .inner
            .http
            .delete(&url)
            .header("apikey", &self.inner.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.inner.service_role_key),
            )
            .send()
            .await?;

        Self::require_success(response).await.map(|_| ())
    }

    /// Row filter URL for one product id.
    fn row_url(&self, id: &ProductId) -> String {
        format!(
            "{}?id=eq.{}",
            self.inner.products_endpoint,
            urlencoding::encode(id.as_str())
        )
    }

    /// Return the body on success, the raw detail otherwise.
    async fn require_success(response: reqwest::Response) -> Result<String, BackendError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(BackendError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            })
        }
    }
}
