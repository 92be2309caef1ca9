//! Cart route handlers.
//!
//! Mutations are plain form posts that redirect back to the cart page;
//! the store itself is the single source of truth, so every render reads
//! fresh state from it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use paraiso_core::{Price, ProductId, Theme};

use crate::cart::CartItem;
use crate::checkout::whatsapp_link;
use crate::filters;
use crate::state::AppState;

/// Cart line display data for templates.
pub struct CartItemView {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub material: Option<String>,
    pub image: String,
    pub quantity: u32,
    pub stock: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

#[allow(clippy::cast_lossless)]
impl CartItemView {
    /// Stepper target one below the current quantity (0 removes).
    #[must_use]
    pub const fn quantity_minus_one(&self) -> i64 {
        self.quantity as i64 - 1
    }

    /// Stepper target one above the current quantity.
    #[must_use]
    pub const fn quantity_plus_one(&self) -> i64 {
        self.quantity as i64 + 1
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.product.id.to_string(),
            slug: item.product.slug.to_string(),
            name: item.product.name.clone(),
            material: item.product.material.clone(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            stock: item.product.stock,
            unit_price: item.product.price,
            line_total: item.line_total(),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartTemplate {
    pub theme: Theme,
    pub cart_count: u32,
    pub items: Vec<CartItemView>,
    pub total: Price,
    pub whatsapp_link: String,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: String,
}

/// Update quantity form data. Quantity is signed: zero and below mean
/// "remove the line".
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CartTemplate {
    let cart = state.cart();
    let items: Vec<CartItemView> = cart.items().iter().map(CartItemView::from).collect();

    CartTemplate {
        theme: cart.theme(),
        cart_count: cart.count(),
        total: cart.total(),
        whatsapp_link: whatsapp_link(&state.config().whatsapp_number, cart.items()),
        items,
    }
}

/// Add one unit of a product to the cart.
///
/// Unknown product ids are ignored: the grid the shopper clicked may be
/// a stale render of a catalog that has since changed, and a silent
/// redirect beats a blocking error for that.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddForm>) -> Redirect {
    let id = ProductId::new(form.product_id);
    let products = state.catalog().products().await;

    if let Some(product) = products.iter().find(|p| p.id == id) {
        state.cart().add_to_cart(product.clone());
    } else {
        tracing::warn!(product = %id, "add-to-cart for unknown product id");
    }

    Redirect::to("/cart")
}

/// Set a line's quantity.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateForm>) -> Redirect {
    let id = ProductId::new(form.product_id);
    state.cart().update_quantity(&id, form.quantity);
    Redirect::to("/cart")
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<RemoveForm>) -> Redirect {
    let id = ProductId::new(form.product_id);
    state.cart().remove_from_cart(&id);
    Redirect::to("/cart")
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Redirect {
    state.cart().clear();
    Redirect::to("/cart")
}

/// Checkout: hand the cart off to WhatsApp.
///
/// Builds the deep link from the current cart and redirects to it; the
/// conversation happens entirely in the chat app, nothing comes back.
/// An empty cart has nothing to hand off and returns to the cart page.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Redirect {
    let (empty, link) = {
        let cart = state.cart();
        (
            cart.is_empty(),
            whatsapp_link(&state.config().whatsapp_number, cart.items()),
        )
    };

    if empty {
        Redirect::to("/cart")
    } else {
        Redirect::to(&link)
    }
}
