//! The cart store: single source of truth for cart contents and theme.
//!
//! State transitions are synchronous and run to completion; persistence
//! is write-through to a [`StateStore`]. Derived values (`total`,
//! `count`) are recomputed from the items on every read - they are never
//! stored, so they cannot desync.

use serde::{Deserialize, Serialize};
use tracing::warn;

use paraiso_core::{Price, Product, ProductId, Theme};

use crate::cart::persist::{StateStore, keys};

/// One cart line: a product and how many of it.
///
/// Invariant: quantity is positive, and a cart holds at most one item per
/// product id (duplicate adds merge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Cart contents and theme preference, with write-through persistence.
///
/// Construction loads the persisted state exactly once, synchronously,
/// with no network I/O; consumers can render immediately afterwards.
pub struct CartStore {
    /// Insertion order is display order.
    items: Vec<CartItem>,
    theme: Theme,
    storage: Box<dyn StateStore>,
}

impl CartStore {
    /// Load the persisted cart and theme from `storage`.
    ///
    /// A missing or unreadable record degrades silently: the cart starts
    /// empty and the theme at its default, with the problem logged.
    #[must_use]
    pub fn load(storage: Box<dyn StateStore>) -> Self {
        let items = storage
            .read(keys::CART)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(items) => Some(items),
                Err(e) => {
                    warn!(error = %e, "persisted cart is unreadable, starting empty");
                    None
                }
            })
            .unwrap_or_default();

        let theme = storage
            .read(keys::THEME)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!(error = %e, "persisted theme is unreadable, using default");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            items,
            theme,
            storage,
        }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Add one unit of `product`: merge into the existing line for its id,
    /// or append a new line with quantity 1.
    ///
    /// Stock is not enforced here; an add that pushes the line past the
    /// product's stock is allowed and logged (the storefront UI caps its
    /// quantity stepper, so this marks stale pages and hand-built
    /// requests).
    pub fn add_to_cart(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            if item.quantity > item.product.stock {
                warn!(
                    product = %item.product.id,
                    quantity = item.quantity,
                    stock = item.product.stock,
                    "cart quantity exceeds stock"
                );
            }
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
        self.persist_cart();
    }

    /// Remove the line for `id`. Absent id is a no-op, not an error.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.items.retain(|item| item.product.id != *id);
        self.persist_cart();
    }

    /// Set the quantity of the line for `id`. A quantity of zero or less
    /// removes the line; an absent id is a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == *id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            if item.quantity > item.product.stock {
                warn!(
                    product = %item.product.id,
                    quantity = item.quantity,
                    stock = item.product.stock,
                    "cart quantity exceeds stock"
                );
            }
        }
        self.persist_cart();
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist_cart();
    }

    /// Sum of price × quantity over all lines, recomputed fresh.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines, recomputed fresh.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// The lines, in insertion (display) order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// The persisted theme preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch the theme and persist it. Applying the dark presentation
    /// flag is the templates' job.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        match serde_json::to_string(&self.theme) {
            Ok(raw) => self.storage.write(keys::THEME, &raw),
            Err(e) => warn!(error = %e, "theme serialization failed"),
        }
    }

    fn persist_cart(&self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => self.storage.write(keys::CART, &raw),
            Err(e) => warn!(error = %e, "cart serialization failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use paraiso_core::fallback_products;

    use crate::cart::persist::MemoryStore;

    use super::*;

    fn product(n: usize) -> Product {
        fallback_products().into_iter().nth(n).expect("fallback product")
    }

    fn empty_store() -> CartStore {
        CartStore::load(Box::new(MemoryStore::new()))
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = empty_store();
        for _ in 0..5 {
            cart.add_to_cart(product(0));
        }

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn insertion_order_is_display_order() {
        let mut cart = empty_store();
        cart.add_to_cart(product(2));
        cart.add_to_cart(product(0));
        cart.add_to_cart(product(2));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn update_to_zero_or_negative_removes() {
        let mut cart = empty_store();
        cart.add_to_cart(product(0));
        cart.add_to_cart(product(1));

        cart.update_quantity(&product(0).id, 0);
        assert_eq!(cart.items().len(), 1);

        cart.update_quantity(&product(1).id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_of_absent_id_is_a_no_op() {
        let mut cart = empty_store();
        cart.add_to_cart(product(0));
        cart.update_quantity(&ProductId::new("nope"), 7);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let mut cart = empty_store();
        cart.add_to_cart(product(0));
        cart.remove_from_cart(&ProductId::new("nope"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn totals_are_recomputed_after_every_mutation() {
        let mut cart = empty_store();
        cart.add_to_cart(product(0)); // $15.000
        cart.add_to_cart(product(2)); // $8.500
        cart.update_quantity(&product(0).id, 3);

        assert_eq!(cart.total(), Price::new(3 * 15000 + 8500));
        assert_eq!(cart.count(), 4);

        cart.remove_from_cart(&product(2).id);
        assert_eq!(cart.total(), Price::new(45000));
        assert_eq!(cart.count(), 3);

        cart.clear();
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn over_stock_adds_are_allowed() {
        let mut cart = empty_store();
        let p = product(3); // stock 12
        cart.update_quantity(&p.id, 1); // absent: no-op
        cart.add_to_cart(p.clone());
        cart.update_quantity(&p.id, 999);

        assert_eq!(cart.items()[0].quantity, 999);
    }

    #[test]
    fn state_survives_a_reload() {
        let storage = Arc::new(MemoryStore::new());

        let mut cart = CartStore::load(Box::new(Arc::clone(&storage)));
        cart.add_to_cart(product(0));
        cart.add_to_cart(product(0));
        cart.set_theme(Theme::Dark);
        drop(cart);

        let reloaded = CartStore::load(Box::new(storage));
        assert_eq!(reloaded.count(), 2);
        assert_eq!(reloaded.total(), Price::new(30000));
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn corrupt_persisted_cart_degrades_to_empty() {
        let storage = MemoryStore::new();
        storage.write(keys::CART, "{not json");
        storage.write(keys::THEME, "42");

        let cart = CartStore::load(Box::new(storage));
        assert!(cart.is_empty());
        assert_eq!(cart.theme(), Theme::Light);
    }
}
