//! Validating normalization of raw backend records.
//!
//! The hosted backend stores products as loosely-shaped rows, and older
//! rows predate several columns. Normalization maps any such record onto
//! the canonical [`Product`] with an explicit default per field, or fails
//! with a [`NormalizeError`] - it never produces a partially-filled
//! record. Callers treat one malformed record as a failure of the whole
//! list and fall back to the built-in catalog.

use serde_json::Value;
use thiserror::Error;

use crate::catalog::Product;
use crate::types::{Price, ProductId, Slug};

/// Default stock for records missing the column.
pub const DEFAULT_STOCK: u32 = 10;
/// Default rating for records missing the column or storing a non-number.
pub const DEFAULT_RATING: f64 = 4.5;
/// Default category tag.
pub const DEFAULT_CATEGORY: &str = "varios";
/// Display name for records missing one.
pub const DEFAULT_NAME: &str = "Producto sin nombre";
/// Image URI for records missing one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=400";

/// Error normalizing a backend record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The record was not a JSON object.
    #[error("backend record is not an object: {0}")]
    NotAnObject(String),

    /// A numeric field violated the non-negativity invariant.
    #[error("backend record has negative {field}: {value}")]
    Negative {
        /// Canonical field name.
        field: &'static str,
        /// Offending value.
        value: i64,
    },
}

/// Normalize a list of backend records.
///
/// All-or-nothing: the first malformed record fails the whole list, so the
/// caller renders either a fully-normalized catalog or its fallback - never
/// a mix of good rows and holes.
///
/// # Errors
///
/// Returns the first [`NormalizeError`] encountered.
pub fn normalize_products(records: &[Value]) -> Result<Vec<Product>, NormalizeError> {
    records.iter().map(normalize_product).collect()
}

/// Normalize one backend record into a fully-populated [`Product`].
///
/// Field defaults: price 0, stock [`DEFAULT_STOCK`], rating
/// [`DEFAULT_RATING`], `in_stock` true (false only when explicitly false),
/// `featured` false, image [`PLACEHOLDER_IMAGE`], missing slug or id
/// replaced with generated placeholders. Numeric columns also accept their
/// decimal-string form, which the backend produces for `numeric` columns.
///
/// # Errors
///
/// Returns [`NormalizeError::NotAnObject`] for non-object records and
/// [`NormalizeError::Negative`] when price or stock is negative.
pub fn normalize_product(record: &Value) -> Result<Product, NormalizeError> {
    let Some(obj) = record.as_object() else {
        return Err(NormalizeError::NotAnObject(record.to_string()));
    };

    let price = match int_field(obj, &["price_ars", "price"]) {
        Some(pesos) if pesos < 0 => {
            return Err(NormalizeError::Negative {
                field: "price",
                value: pesos,
            });
        }
        Some(pesos) => Price::new(pesos),
        None => Price::ZERO,
    };

    let stock = match int_field(obj, &["stock"]) {
        Some(units) if units < 0 => {
            return Err(NormalizeError::Negative {
                field: "stock",
                value: units,
            });
        }
        Some(units) => u32::try_from(units).unwrap_or(u32::MAX),
        None => DEFAULT_STOCK,
    };

    let id = id_field(obj).map_or_else(ProductId::generate, ProductId::new);

    let slug = str_field(obj, &["slug"])
        .and_then(|raw| Slug::parse(raw).ok())
        .unwrap_or_else(Slug::placeholder);

    let image = str_field(obj, &["image_url", "image"])
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    Ok(Product {
        id,
        slug,
        category: str_field(obj, &["category"])
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        name: str_field(obj, &["name_es", "name"])
            .unwrap_or(DEFAULT_NAME)
            .to_string(),
        description: str_field(obj, &["description_es", "description"])
            .unwrap_or_default()
            .to_string(),
        price,
        material: str_field(obj, &["material"]).map(ToString::to_string),
        stock,
        rating: float_field(obj, "rating").unwrap_or(DEFAULT_RATING),
        image,
        featured: obj.get("featured").and_then(Value::as_bool).unwrap_or(false),
        // Only an explicit false marks a product as withdrawn.
        in_stock: obj.get("in_stock").and_then(Value::as_bool) != Some(false),
    })
}

/// First non-empty string under any of `keys`.
fn str_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    keys: &[&str],
) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
}

/// First integral value under any of `keys`: a JSON number (floats are
/// truncated) or a numeric string.
#[allow(clippy::cast_possible_truncation)]
fn int_field(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<i64> {
    keys.iter().filter_map(|key| obj.get(*key)).find_map(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    })
}

/// Float under `key`: a JSON number or a numeric string.
fn float_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Id under `id`: the backend serial (number) or an opaque string.
fn id_field(obj: &serde_json::Map<String, Value>) -> Option<String> {
    match obj.get("id")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn full_record_passes_through() {
        let record = json!({
            "id": 7,
            "slug": "mate-imperial",
            "category": "mates",
            "name_es": "Mate Imperial",
            "description_es": "Mate de cerámica artesanal.",
            "price_ars": 15000,
            "material": "ceramica",
            "stock": 25,
            "rating": 4.9,
            "image_url": "https://example.com/mate.jpg",
            "featured": true,
            "in_stock": true,
        });

        let product = normalize_product(&record).expect("normalizes");
        assert_eq!(product.id.as_str(), "7");
        assert_eq!(product.slug.as_str(), "mate-imperial");
        assert_eq!(product.name, "Mate Imperial");
        assert_eq!(product.price, Price::new(15000));
        assert_eq!(product.material.as_deref(), Some("ceramica"));
        assert_eq!(product.stock, 25);
        assert!(product.featured);
        assert!(product.in_stock);
    }

    #[test]
    fn empty_object_gets_full_defaults() {
        let product = normalize_product(&json!({})).expect("normalizes");
        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.description, "");
        assert_eq!(product.price, Price::ZERO);
        assert_eq!(product.stock, DEFAULT_STOCK);
        assert!((product.rating - DEFAULT_RATING).abs() < f64::EPSILON);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.material, None);
        assert!(!product.featured);
        assert!(product.in_stock);
        assert!(product.slug.as_str().starts_with("product-"));
        assert!(!product.id.as_str().is_empty());
    }

    #[test]
    fn name_es_takes_precedence() {
        let record = json!({"name_es": "Mate Torpedo", "name": "Torpedo Mate"});
        let product = normalize_product(&record).expect("normalizes");
        assert_eq!(product.name, "Mate Torpedo");
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let record = json!({"price_ars": "18000", "rating": "4.8", "stock": "30"});
        let product = normalize_product(&record).expect("normalizes");
        assert_eq!(product.price, Price::new(18000));
        assert!((product.rating - 4.8).abs() < f64::EPSILON);
        assert_eq!(product.stock, 30);
    }

    #[test]
    fn non_numeric_rating_falls_back() {
        let record = json!({"rating": "five stars"});
        let product = normalize_product(&record).expect("normalizes");
        assert!((product.rating - DEFAULT_RATING).abs() < f64::EPSILON);
    }

    #[test]
    fn in_stock_is_false_only_when_explicit() {
        let withdrawn = normalize_product(&json!({"in_stock": false})).expect("normalizes");
        assert!(!withdrawn.in_stock);
        let null_flag = normalize_product(&json!({"in_stock": null})).expect("normalizes");
        assert!(null_flag.in_stock);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = normalize_product(&json!({"price_ars": -100})).expect_err("rejects");
        assert_eq!(
            err,
            NormalizeError::Negative {
                field: "price",
                value: -100
            }
        );
    }

    #[test]
    fn invalid_slug_gets_placeholder() {
        let product = normalize_product(&json!({"slug": "Mate Imperial"})).expect("normalizes");
        assert!(product.slug.as_str().starts_with("product-"));
    }

    #[test]
    fn one_bad_record_fails_the_list() {
        let records = vec![json!({"name_es": "Bueno"}), json!("no soy un objeto")];
        assert!(normalize_products(&records).is_err());
    }
}
