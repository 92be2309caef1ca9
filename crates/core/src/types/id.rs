//! Opaque product identifier.
//!
//! The hosted backend assigns ids; their shape is an implementation detail
//! of the backend (serial integers in practice, UUIDs after a re-import).
//! Treating them as opaque strings keeps the storefront independent of that
//! choice.

use serde::{Deserialize, Serialize};

/// Opaque, unique identifier of a catalog product.
///
/// Ids are never parsed or compared numerically; equality is the only
/// operation the domain needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an existing backend-assigned id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    ///
    /// Used by normalization when a backend record arrives without an id,
    /// so the record still gets a unique key for cart and list handling.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
