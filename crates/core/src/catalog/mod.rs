//! The canonical catalog record and its supporting data.
//!
//! - [`product`] - the fully-populated [`Product`] shape every component
//!   works with
//! - [`normalize`] - validating normalization of raw backend records
//! - [`fallback`] - the built-in catalog used when the backend is
//!   unreachable

pub mod fallback;
pub mod normalize;
pub mod product;

pub use fallback::fallback_products;
pub use normalize::{NormalizeError, normalize_product, normalize_products};
pub use product::Product;
