//! Seed the hosted catalog with the built-in fallback products.
//!
//! Per-row: a duplicate-slug rejection from the backend is logged and
//! skipped so re-running the command converges instead of aborting; any
//! other rejection aborts the run.

use tracing::{info, warn};

use paraiso_admin::backend::{BackendError, CatalogAdminClient, ProductRecord};
use paraiso_admin::config::AdminConfig;
use paraiso_core::{Product, fallback_products};

/// Map a canonical product onto the backend's row shape.
fn record_from(product: &Product) -> ProductRecord {
    ProductRecord {
        slug: product.slug.to_string(),
        name_es: product.name.clone(),
        description_es: Some(product.description.clone()).filter(|d| !d.is_empty()),
        price_ars: product.price.pesos(),
        image_url: product.image.clone(),
        category: product.category.clone(),
        material: product.material.clone(),
        stock: i64::from(product.stock),
        rating: product.rating,
        featured: product.featured,
        in_stock: product.in_stock,
    }
}

/// Push the fallback catalog to the hosted backend.
///
/// # Errors
///
/// Returns an error when configuration is missing or the backend rejects
/// a row for a reason other than a duplicate.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let client = CatalogAdminClient::new(&config.backend);

    let products = fallback_products();
    info!(count = products.len(), "seeding catalog");

    let mut created = 0usize;
    let mut skipped = 0usize;
    for product in &products {
        let record = record_from(product);
        match client.create_product(&record).await {
            Ok(()) => {
                info!(slug = %record.slug, "created");
                created += 1;
            }
            // PostgREST spells unique-constraint rejections out in the body.
            Err(BackendError::Api { status, message })
                if status == 409 || message.contains("duplicate key") =>
            {
                warn!(slug = %record.slug, "already present, skipped");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(created, skipped, "seeding finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_mapping_keeps_backend_column_values() {
        let products = fallback_products();
        let product = products.first().expect("fallback products");
        let record = record_from(product);

        assert_eq!(record.slug, "mate-imperial");
        assert_eq!(record.name_es, "Mate Imperial");
        assert_eq!(record.price_ars, 15000);
        assert_eq!(record.stock, 25);
        assert!(record.description_es.is_some());
    }
}
