//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Home page (hero + featured products)
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (backend reachability)
//!
//! # Store
//! GET  /store               - Product grid with filter/sort/search
//! GET  /store/suggestions   - Search suggestions fragment (HTMX)
//! GET  /product/{slug}      - Product detail + related products
//!
//! # Cart
//! GET  /cart                - Cart page
//! POST /cart/add            - Add one unit of a product
//! POST /cart/update         - Set a line's quantity (<= 0 removes)
//! POST /cart/remove         - Remove a line
//! POST /cart/clear          - Empty the cart
//! GET  /checkout            - Redirect to the WhatsApp deep link
//!
//! # Theme
//! POST /theme               - Switch the persisted theme
//! ```

pub mod cart;
pub mod home;
pub mod products;
pub mod store;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the store routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(store::index))
        .route("/suggestions", get(store::suggest))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/store", store_routes())
        .route("/product/{slug}", get(products::show))
        .nest("/cart", cart_routes())
        .route("/checkout", get(cart::checkout))
        .route("/theme", post(theme::set))
}
