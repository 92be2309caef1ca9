//! Core types for Paraíso Matero.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod slug;
pub mod theme;

pub use id::ProductId;
pub use price::Price;
pub use slug::{Slug, SlugError};
pub use theme::Theme;
