//! One search box session: debounced text plus dropdown navigation.
//!
//! Ties [`SearchDebouncer`] and [`SuggestionNav`] together the way the
//! store page uses them - typing feeds both, committing a suggestion
//! feeds the text back through the debouncer - so the interplay can be
//! exercised as a whole.

use std::time::Instant;

use paraiso_core::Product;

use crate::catalog::debounce::SearchDebouncer;
use crate::catalog::suggest::{self, NavKey, SuggestionNav};

/// The interactive state of the store page's search field.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    debouncer: SearchDebouncer,
    nav: SuggestionNav,
}

impl SearchBox {
    /// An empty, closed search box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shopper typed: restart the quiet period, open the dropdown,
    /// reset the highlight.
    pub fn type_text(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.input(text, now);
        self.nav.on_input();
    }

    /// The shopper cleared the field with the clear button.
    pub fn clear(&mut self, now: Instant) {
        self.debouncer.input(String::new(), now);
        self.nav.on_click_outside();
    }

    /// The shopper focused the field.
    pub fn focus(&mut self) {
        self.nav.on_focus();
    }

    /// The shopper clicked outside the search area.
    pub fn click_outside(&mut self) {
        self.nav.on_click_outside();
    }

    /// Advance time; returns `true` when the committed search text
    /// changed and the visible list should be re-derived.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.debouncer.poll(now)
    }

    /// Apply a navigation key. Enter on a highlighted row commits that
    /// suggestion's name as the search text (through the debouncer, like
    /// any other input) and closes the dropdown.
    pub fn key(&mut self, key: NavKey, products: &[Product], now: Instant) {
        let list = suggest::suggestions(products, self.debouncer.raw());
        if let Some(i) = self.nav.on_key(key, list.len()) {
            if let Some(product) = list.get(i) {
                self.debouncer.input(product.name.clone(), now);
            }
        }
    }

    /// The shopper clicked a suggestion row directly.
    pub fn select(&mut self, product: &Product, now: Instant) {
        self.debouncer.input(product.name.clone(), now);
        self.nav.on_click_outside();
    }

    /// Current suggestion list, derived from the raw (non-debounced)
    /// text.
    #[must_use]
    pub fn suggestions<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        if self.nav.is_open() {
            suggest::suggestions(products, self.debouncer.raw())
        } else {
            Vec::new()
        }
    }

    /// The committed text for the filter pipeline.
    #[must_use]
    pub fn committed(&self) -> &str {
        self.debouncer.committed()
    }

    /// The raw text as typed.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.debouncer.raw()
    }

    /// Highlighted dropdown row, if any.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.nav.highlighted()
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.nav.is_open()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use paraiso_core::fallback_products;

    use super::*;

    #[test]
    fn enter_commits_the_highlighted_name_through_the_debouncer() {
        let products = fallback_products();
        let start = Instant::now();
        let mut search = SearchBox::new();

        search.type_text("mate", start);
        assert_eq!(search.suggestions(&products).len(), 3);

        search.key(NavKey::Down, &products, start);
        search.key(NavKey::Down, &products, start);
        search.key(NavKey::Enter, &products, start);

        assert!(!search.is_open());
        assert_eq!(search.raw(), "Mate Torpedo");
        // The committed value still waits out the quiet period.
        assert_eq!(search.committed(), "");
        assert!(search.tick(start + Duration::from_millis(300)));
        assert_eq!(search.committed(), "Mate Torpedo");
    }

    #[test]
    fn closed_dropdown_shows_no_suggestions() {
        let products = fallback_products();
        let start = Instant::now();
        let mut search = SearchBox::new();

        search.type_text("mate", start);
        search.click_outside();
        assert!(search.suggestions(&products).is_empty());

        // Refocusing reopens with the same raw text.
        search.focus();
        assert_eq!(search.suggestions(&products).len(), 3);
    }
}
