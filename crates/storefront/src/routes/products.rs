//! Product detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use paraiso_core::{Product, Slug, Theme};

use crate::catalog::engine;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Related products shown under the detail.
const RELATED_LIMIT: usize = 4;

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductTemplate {
    pub theme: Theme,
    pub cart_count: u32,
    pub product: Product,
    pub related: Vec<Product>,
}

/// Display a product by slug.
///
/// # Errors
///
/// `AppError::NotFound` when no product carries the slug (including
/// syntactically invalid slugs, which by construction nobody carries).
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductTemplate, AppError> {
    let slug = Slug::parse(&slug).map_err(|_| AppError::NotFound(slug.clone()))?;

    let product = state
        .catalog()
        .product_by_slug(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(slug.to_string()))?;

    let all = state.catalog().products().await;
    let related: Vec<Product> = engine::related(&all, &product, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    let (theme, cart_count) = {
        let cart = state.cart();
        (cart.theme(), cart.count())
    };

    Ok(ProductTemplate {
        theme,
        cart_count,
        product,
        related,
    })
}
