//! Inspect the live catalog.

use tracing::info;

use paraiso_admin::backend::CatalogAdminClient;
use paraiso_admin::config::AdminConfig;

/// Print the live catalog, one row per product.
///
/// # Errors
///
/// Returns an error when configuration is missing or the backend read
/// fails (no fallback here - the operator wants the truth).
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let client = CatalogAdminClient::new(&config.backend);

    let products = client.list_products().await?;
    info!(count = products.len(), "live catalog");
    for product in &products {
        info!(
            id = %product.id,
            slug = %product.slug,
            name = %product.name,
            price = %product.price,
            stock = product.stock,
            in_stock = product.in_stock,
        );
    }

    Ok(())
}
