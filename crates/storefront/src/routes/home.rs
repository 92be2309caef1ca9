//! Home page: hero plus the featured-products grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use paraiso_core::{Product, Theme};

use crate::filters;
use crate::state::AppState;

/// The featured grid shows at most this many products.
const FEATURED_LIMIT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub theme: Theme,
    pub cart_count: u32,
    pub featured: Vec<Product>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let products = state.catalog().products().await;
    let featured: Vec<Product> = products
        .iter()
        .filter(|p| p.featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect();

    let (theme, cart_count) = {
        let cart = state.cart();
        (cart.theme(), cart.count())
    };

    HomeTemplate {
        theme,
        cart_count,
        featured,
    }
}
