//! The catalog filter/sort engine.
//!
//! A pure derivation from (product list, filter state) to the ordered
//! visible subset. Filters are conjunctive and applied in a fixed order:
//! text, category, material, price range, then sort.

use paraiso_core::{Price, Product};

/// Upper price bound used when the catalog is empty.
pub const EMPTY_CATALOG_MAX_PRICE: Price = Price::new(100_000);

/// Default lower price bound.
pub const DEFAULT_PRICE_MIN: Price = Price::new(1);

/// How the visible list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Rating descending, ties broken by slug ascending. The tie-break
    /// makes the default order a deterministic total order.
    #[default]
    Featured,
    /// Price ascending.
    PriceAscending,
    /// Price descending.
    PriceDescending,
    /// Rating descending.
    RatingDescending,
}

impl SortOption {
    /// Stable query-parameter form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::RatingDescending => "rating",
        }
    }

    /// Parse a query-parameter value, treating anything unknown as the
    /// default order.
    #[must_use]
    pub fn parse_param(param: &str) -> Self {
        match param {
            "price-asc" => Self::PriceAscending,
            "price-desc" => Self::PriceDescending,
            "rating" => Self::RatingDescending,
            _ => Self::Featured,
        }
    }

    /// Label shown in the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Destacados",
            Self::PriceAscending => "Precio: menor a mayor",
            Self::PriceDescending => "Precio: mayor a menor",
            Self::RatingDescending => "Mejor valorados",
        }
    }

    /// All options, in dropdown order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Featured,
            Self::PriceAscending,
            Self::PriceDescending,
            Self::RatingDescending,
        ]
    }
}

/// The store page's transient filter/sort state.
///
/// Not persisted anywhere; it round-trips through the store page's query
/// parameters and resets to defaults on "clear filters".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Committed search text (the debounced value, not the raw input).
    pub search: String,
    /// Exact-match category filter.
    pub category: Option<String>,
    /// Exact-match material filter.
    pub material: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Price,
    /// Inclusive upper price bound.
    pub price_max: Price,
    /// Ordering of the visible list.
    pub sort: SortOption,
}

impl FilterState {
    /// Default state for a catalog whose maximum price is `max_price`.
    #[must_use]
    pub const fn new(max_price: Price) -> Self {
        Self {
            search: String::new(),
            category: None,
            material: None,
            price_min: DEFAULT_PRICE_MIN,
            price_max: max_price,
            sort: SortOption::Featured,
        }
    }

    /// The "clear filters" operation: back to defaults, with the price
    /// range upper bound tracking the *current* maximum product price.
    pub fn reset(&mut self, max_price: Price) {
        *self = Self::new(max_price);
    }

    /// Whether any filter deviates from the defaults (the sort option is
    /// presentation, not a filter, and does not count).
    #[must_use]
    pub fn is_active(&self, max_price: Price) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.material.is_some()
            || self.price_min > DEFAULT_PRICE_MIN
            || self.price_max < max_price
    }
}

/// Maximum price across the full product list, or
/// [`EMPTY_CATALOG_MAX_PRICE`] when the list is empty.
#[must_use]
pub fn max_price(products: &[Product]) -> Price {
    products
        .iter()
        .map(|p| p.price)
        .max()
        .unwrap_or(EMPTY_CATALOG_MAX_PRICE)
}

/// Derive the ordered visible subset for `filters`.
///
/// Pure: the input list is never reordered or mutated, and applying the
/// same state twice yields the same result.
#[must_use]
pub fn visible<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    let needle = filters.search.to_lowercase();

    let mut result: Vec<&Product> = products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .filter(|p| {
            filters
                .category
                .as_ref()
                .is_none_or(|category| p.category == *category)
        })
        .filter(|p| {
            filters
                .material
                .as_ref()
                .is_none_or(|material| p.material.as_ref() == Some(material))
        })
        .filter(|p| p.price >= filters.price_min && p.price <= filters.price_max)
        .collect();

    match filters.sort {
        SortOption::PriceAscending => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDescending => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::RatingDescending => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Featured => result.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.slug.cmp(&b.slug))
        }),
    }

    result
}

/// Distinct non-empty categories of the full (unfiltered) list, in
/// first-seen order. Facet lists never change as filters are applied,
/// only as the underlying list does.
#[must_use]
pub fn unique_categories(products: &[Product]) -> Vec<&str> {
    let mut seen = Vec::new();
    for p in products {
        if !p.category.is_empty() && !seen.contains(&p.category.as_str()) {
            seen.push(p.category.as_str());
        }
    }
    seen
}

/// Distinct materials of the full (unfiltered) list, in first-seen order.
#[must_use]
pub fn unique_materials(products: &[Product]) -> Vec<&str> {
    let mut seen = Vec::new();
    for p in products {
        if let Some(material) = p.material.as_deref() {
            if !material.is_empty() && !seen.contains(&material) {
                seen.push(material);
            }
        }
    }
    seen
}

/// Products related to `to`: same category, different id, original order,
/// at most `limit`.
#[must_use]
pub fn related<'a>(products: &'a [Product], to: &Product, limit: usize) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.id != to.id && p.category == to.category)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use paraiso_core::{ProductId, Slug, fallback_products};

    use super::*;

    fn product(id: &str, slug: &str, price: i64, rating: f64) -> Product {
        Product {
            id: ProductId::new(id),
            slug: Slug::parse(slug).expect("test slug"),
            category: "mates".to_string(),
            name: format!("Producto {id}"),
            description: String::new(),
            price: Price::new(price),
            material: None,
            stock: 10,
            rating,
            image: String::new(),
            featured: false,
            in_stock: true,
        }
    }

    fn ids(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn price_range_is_inclusive() {
        let products = vec![
            product("a", "a", 10000, 4.0),
            product("b", "b", 25000, 4.0),
            product("c", "c", 8000, 4.0),
        ];
        let mut filters = FilterState::new(max_price(&products));
        filters.price_min = Price::new(9000);
        filters.price_max = Price::new(20000);

        assert_eq!(ids(&visible(&products, &filters)), vec!["a"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name_or_description() {
        let products = fallback_products();
        let mut filters = FilterState::new(max_price(&products));
        filters.search = "mate".to_string();

        let result = visible(&products, &filters);
        assert!(result.iter().any(|p| p.name == "Mate Imperial"));
        assert!(!result.iter().any(|p| p.name == "Bombilla Pico de Loro"));
    }

    #[test]
    fn featured_sort_breaks_rating_ties_by_slug() {
        let products = vec![product("A", "b", 1000, 5.0), product("B", "a", 1000, 5.0)];
        let filters = FilterState::new(max_price(&products));

        assert_eq!(ids(&visible(&products, &filters)), vec!["B", "A"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let mut with_material = product("a", "con-bombilla", 5000, 4.0);
        with_material.material = Some("alpaca".to_string());
        with_material.name = "Bombilla Clasica".to_string();
        let products = vec![with_material, product("b", "otro", 5000, 4.0)];

        let mut filters = FilterState::new(max_price(&products));
        filters.search = "bombilla".to_string();
        filters.material = Some("alpaca".to_string());
        assert_eq!(ids(&visible(&products, &filters)), vec!["a"]);

        filters.material = Some("ceramica".to_string());
        assert!(visible(&products, &filters).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let products = fallback_products();
        let mut filters = FilterState::new(max_price(&products));
        filters.search = "mate".to_string();
        filters.sort = SortOption::PriceDescending;

        let once = ids(&visible(&products, &filters));
        let twice = ids(&visible(&products, &filters));
        assert_eq!(once, twice);
    }

    #[test]
    fn sorts_by_price_both_ways() {
        let products = vec![
            product("a", "a", 15000, 4.0),
            product("b", "b", 8500, 4.0),
            product("c", "c", 45000, 4.0),
        ];
        let mut filters = FilterState::new(max_price(&products));

        filters.sort = SortOption::PriceAscending;
        assert_eq!(ids(&visible(&products, &filters)), vec!["b", "a", "c"]);

        filters.sort = SortOption::PriceDescending;
        assert_eq!(ids(&visible(&products, &filters)), vec!["c", "a", "b"]);
    }

    #[test]
    fn facets_keep_first_seen_order_and_skip_empties() {
        let mut products = fallback_products();
        products.push({
            let mut p = product("x", "x", 100, 3.0);
            p.category = String::new();
            p
        });

        assert_eq!(unique_categories(&products), vec!["mates", "bombillas", "kits"]);
        assert_eq!(
            unique_materials(&products),
            vec!["ceramica", "calabaza", "alpaca", "varios"]
        );
    }

    #[test]
    fn facets_ignore_active_filters() {
        // Facets derive from the full list by construction; this pins the
        // contract that they are computed before filtering.
        let products = fallback_products();
        let mut filters = FilterState::new(max_price(&products));
        filters.category = Some("kits".to_string());

        let _ = visible(&products, &filters);
        assert_eq!(unique_categories(&products).len(), 3);
    }

    #[test]
    fn clear_filters_tracks_current_max_price() {
        let products = vec![product("a", "a", 15000, 4.0)];
        let mut filters = FilterState::new(max_price(&products));
        filters.search = "algo".to_string();
        filters.price_max = Price::new(9000);

        let grown = [product("a", "a", 15000, 4.0), product("b", "b", 60000, 4.0)];
        filters.reset(max_price(&grown));

        assert_eq!(filters, FilterState::new(Price::new(60000)));
        assert_eq!(filters.price_max, Price::new(60000));
        assert_eq!(filters.price_min, DEFAULT_PRICE_MIN);
    }

    #[test]
    fn empty_catalog_uses_fixed_max_price() {
        assert_eq!(max_price(&[]), EMPTY_CATALOG_MAX_PRICE);
    }

    #[test]
    fn zero_priced_products_are_hidden_by_the_default_lower_bound() {
        // Normalization maps a missing price to 0; the default range
        // starts at 1, so such products only appear when the shopper
        // explicitly lowers the bound.
        let products = vec![product("free", "free", 0, 4.0), product("a", "a", 100, 4.0)];
        let mut filters = FilterState::new(max_price(&products));
        assert_eq!(ids(&visible(&products, &filters)), vec!["a"]);

        filters.price_min = Price::ZERO;
        assert_eq!(visible(&products, &filters).len(), 2);
    }

    #[test]
    fn related_products_share_category_and_exclude_self() {
        let products = fallback_products();
        let imperial = products.first().expect("fallback has products").clone();

        let rel = related(&products, &imperial, 4);
        assert!(rel.iter().all(|p| p.category == "mates"));
        assert!(rel.iter().all(|p| p.id != imperial.id));
        assert_eq!(rel.len(), 1); // only Mate Torpedo shares the category
    }

    #[test]
    fn sort_param_round_trips() {
        for option in SortOption::all() {
            assert_eq!(SortOption::parse_param(option.as_str()), option);
        }
        assert_eq!(SortOption::parse_param("garbage"), SortOption::Featured);
    }
}
