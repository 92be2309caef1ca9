//! The canonical product record.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, Slug};

/// A fully-populated catalog product.
///
/// Every component works with this shape and only this shape: raw backend
/// records are run through [`crate::normalize_product`] first, so consumers
/// never deal with partial data. Products are read-only from the
/// storefront's perspective; they are created and edited only through the
/// admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque unique identifier, the cart's merge key.
    pub id: ProductId,
    /// Unique URL-safe identifier used in storefront paths.
    pub slug: Slug,
    /// Category tag (e.g. "mates", "bombillas").
    pub category: String,
    /// Display name, Spanish.
    pub name: String,
    /// Long description, Spanish. May be empty.
    pub description: String,
    /// Whole-peso ARS price.
    pub price: Price,
    /// Material tag, when the product has a meaningful one.
    pub material: Option<String>,
    /// Units on hand.
    pub stock: u32,
    /// Average rating, conventionally 1.0-5.0.
    pub rating: f64,
    /// Image URI.
    pub image: String,
    /// Shown in the home-page featured grid.
    pub featured: bool,
    /// Offered for sale at all (distinct from `stock == 0`).
    pub in_stock: bool,
}
