//! URL-safe product slugs.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    /// Slug was empty.
    #[error("slug is empty")]
    Empty,
    /// Slug contained a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
}

/// A unique, URL-safe product identifier used in storefront paths
/// (`/product/{slug}`).
///
/// Slugs are stable across normalization: whatever representation the
/// backend stores, a valid slug passes through unchanged.
///
/// Ordering is byte-wise, which is what the featured sort uses as its
/// deterministic tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Parse a slug, accepting only lowercase alphanumerics and hyphens.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] when the input is empty or contains a
    /// character outside `[a-z0-9-]`.
    pub fn parse(input: impl Into<String>) -> Result<Self, SlugError> {
        let input = input.into();
        if input.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(c) = input
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidChar(c));
        }
        Ok(Self(input))
    }

    /// Generate a placeholder slug (`product-` plus six random digits) for
    /// backend records that arrive without one.
    #[must_use]
    pub fn placeholder() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..6).map(|_| rng.random_range(0..=9).to_string()).collect();
        Self(format!("product-{suffix}"))
    }

    /// Derive a slug from a display name: lowercased, accents stripped to
    /// their ASCII base where common in Spanish, runs of other characters
    /// collapsed to single hyphens.
    ///
    /// Returns `None` when nothing sluggable remains.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let mut out = String::with_capacity(name.len());
        for c in name.chars() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            let mapped = match lower {
                'á' => Some('a'),
                'é' => Some('e'),
                'í' => Some('i'),
                'ó' => Some('o'),
                'ú' | 'ü' => Some('u'),
                'ñ' => Some('n'),
                c if c.is_ascii_lowercase() || c.is_ascii_digit() => Some(c),
                _ => None,
            };
            match mapped {
                Some(c) => out.push(c),
                None if out.ends_with('-') || out.is_empty() => {}
                None => out.push('-'),
            }
        }
        let trimmed = out.trim_matches('-');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_slugs() {
        assert!(Slug::parse("mate-imperial").is_ok());
        assert!(Slug::parse("bombilla-pico-de-loro").is_ok());
        assert!(Slug::parse("set-2024").is_ok());
    }

    #[test]
    fn rejects_empty_and_invalid() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
        assert_eq!(Slug::parse("Mate"), Err(SlugError::InvalidChar('M')));
        assert_eq!(Slug::parse("mate imperial"), Err(SlugError::InvalidChar(' ')));
    }

    #[test]
    fn placeholder_shape() {
        let slug = Slug::placeholder();
        assert!(slug.as_str().starts_with("product-"));
        assert_eq!(slug.as_str().len(), "product-".len() + 6);
        // Placeholders must themselves be valid slugs.
        assert!(Slug::parse(slug.as_str()).is_ok());
    }

    #[test]
    fn slugifies_spanish_names() {
        assert_eq!(
            Slug::from_name("Mate Imperial").map(|s| s.as_str().to_string()),
            Some("mate-imperial".to_string())
        );
        assert_eq!(
            Slug::from_name("Yerba Orgánica 1kg").map(|s| s.as_str().to_string()),
            Some("yerba-organica-1kg".to_string())
        );
        assert_eq!(Slug::from_name("¡¡¡"), None);
    }

    #[test]
    fn orders_bytewise() {
        let a = Slug::parse("a").expect("valid");
        let b = Slug::parse("b").expect("valid");
        assert!(a < b);
    }
}
