//! Store page: the filterable, sortable, searchable product grid.
//!
//! Filter state round-trips through query parameters; the search box gets
//! its suggestions dropdown from an HTMX fragment driven by the raw input.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::{Deserialize, Deserializer};
use tracing::instrument;

use paraiso_core::{Price, Product, Theme};

use crate::catalog::engine::{self, FilterState, SortOption};
use crate::catalog::suggest::suggestions;
use crate::filters;
use crate::state::AppState;

/// Deserialize empty strings as None for optional numeric fields.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Store page query parameters.
#[derive(Debug, Deserialize)]
pub struct StoreQuery {
    /// Committed search text.
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub material: Option<String>,
    /// Min price (whole pesos)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min: Option<i64>,
    /// Max price (whole pesos)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max: Option<i64>,
    #[serde(default)]
    pub sort: String,
}

impl StoreQuery {
    /// Build the engine's filter state for a catalog topping out at
    /// `max_price`. Empty-string facet params mean "not selected".
    fn into_filters(self, max_price: Price) -> FilterState {
        FilterState {
            search: self.q,
            category: self.category.filter(|c| !c.is_empty()),
            material: self.material.filter(|m| !m.is_empty()),
            price_min: self.min.map_or(engine::DEFAULT_PRICE_MIN, Price::new),
            price_max: self.max.map_or(max_price, Price::new),
            sort: SortOption::parse_param(&self.sort),
        }
    }
}

/// A facet chip (category or material) in the filter form.
pub struct FacetView {
    pub value: String,
    pub selected: bool,
}

/// A sort dropdown entry.
pub struct SortView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Store page template.
#[derive(Template, WebTemplate)]
#[template(path = "store/index.html")]
pub struct StoreTemplate {
    pub theme: Theme,
    pub cart_count: u32,
    pub products: Vec<Product>,
    pub categories: Vec<FacetView>,
    pub materials: Vec<FacetView>,
    pub sorts: Vec<SortView>,
    pub search: String,
    pub price_min: Price,
    pub price_max: Price,
    pub max_price: Price,
    pub has_active_filters: bool,
}

/// Suggestions dropdown fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/suggestions.html")]
pub struct SuggestionsTemplate {
    pub names: Vec<String>,
}

/// Suggestions query parameters.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// Display the store page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Query(query): Query<StoreQuery>) -> StoreTemplate {
    let all = state.catalog().products().await;
    let max_price = engine::max_price(&all);
    let filters = query.into_filters(max_price);

    let products: Vec<Product> = engine::visible(&all, &filters).into_iter().cloned().collect();

    let categories = engine::unique_categories(&all)
        .into_iter()
        .map(|value| FacetView {
            selected: filters.category.as_deref() == Some(value),
            value: value.to_string(),
        })
        .collect();
    let materials = engine::unique_materials(&all)
        .into_iter()
        .map(|value| FacetView {
            selected: filters.material.as_deref() == Some(value),
            value: value.to_string(),
        })
        .collect();
    let sorts = SortOption::all()
        .into_iter()
        .map(|option| SortView {
            value: option.as_str(),
            label: option.label(),
            selected: option == filters.sort,
        })
        .collect();

    let (theme, cart_count) = {
        let cart = state.cart();
        (cart.theme(), cart.count())
    };

    StoreTemplate {
        theme,
        cart_count,
        products,
        categories,
        materials,
        sorts,
        has_active_filters: filters.is_active(max_price),
        search: filters.search,
        price_min: filters.price_min,
        price_max: filters.price_max,
        max_price,
    }
}

/// Suggestions endpoint: up to five product names matching the raw
/// (non-debounced) search text.
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> SuggestionsTemplate {
    let all = state.catalog().products().await;
    let names = suggestions(&all, &query.q)
        .into_iter()
        .map(|p| p.name.clone())
        .collect();

    SuggestionsTemplate { names }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str, min: Option<i64>, max: Option<i64>) -> StoreQuery {
        StoreQuery {
            q: q.to_string(),
            category: Some(String::new()),
            material: None,
            min,
            max,
            sort: "price-desc".to_string(),
        }
    }

    #[test]
    fn empty_facet_params_mean_unselected() {
        let filters = query("", None, None).into_filters(Price::new(50000));
        assert_eq!(filters.category, None);
        assert_eq!(filters.material, None);
    }

    #[test]
    fn missing_bounds_default_to_full_range() {
        let filters = query("mate", None, None).into_filters(Price::new(50000));
        assert_eq!(filters.price_min, engine::DEFAULT_PRICE_MIN);
        assert_eq!(filters.price_max, Price::new(50000));
        assert_eq!(filters.sort, SortOption::PriceDescending);
    }

    #[test]
    fn explicit_bounds_are_kept() {
        let filters = query("", Some(9000), Some(20000)).into_filters(Price::new(50000));
        assert_eq!(filters.price_min, Price::new(9000));
        assert_eq!(filters.price_max, Price::new(20000));
    }
}
