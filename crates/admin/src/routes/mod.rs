//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /auth/login           - Login form
//! POST /auth/login           - Login against the hosted auth service
//! POST /auth/logout          - Clear the session
//!
//! # Products (session required)
//! GET  /                     - Dashboard: live product table
//! GET  /products/new         - Create form
//! POST /products             - Create
//! GET  /products/{id}/edit   - Edit form
//! POST /products/{id}        - Update
//! POST /products/{id}/delete - Delete
//! ```

pub mod auth;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::dashboard))
        .route("/products", post(products::create))
        .route("/products/new", get(products::new_form))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/edit", get(products::edit_form))
        .route("/products/{id}/delete", post(products::delete))
        .nest("/auth", auth_routes())
}
