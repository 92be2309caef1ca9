//! The cart flow end to end: adds, quantity edits, persistence reload,
//! and the WhatsApp handoff link.

use std::sync::Arc;

use paraiso_core::{Price, fallback_products};
use paraiso_storefront::cart::{CartStore, MemoryStore};
use paraiso_storefront::checkout::whatsapp_link;

#[test]
fn a_full_visit_survives_a_restart_and_hands_off_to_whatsapp() {
    let storage = Arc::new(MemoryStore::new());
    let products = fallback_products();

    // First visit: two mates, one bombilla, then one mate less.
    {
        let mut cart = CartStore::load(Box::new(Arc::clone(&storage)));
        let imperial = products[0].clone();
        let bombilla = products[2].clone();

        cart.add_to_cart(imperial.clone());
        cart.add_to_cart(imperial.clone());
        cart.add_to_cart(imperial.clone());
        cart.add_to_cart(bombilla);
        cart.update_quantity(&imperial.id, 2);

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Price::new(2 * 15000 + 8500));
    }

    // The process restarts; the cart comes back from local storage.
    let cart = CartStore::load(Box::new(storage));
    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total(), Price::new(38500));

    // Checkout builds the deep link from exactly what the cart holds.
    let link = whatsapp_link("5493415850155", cart.items());
    let encoded = link.split_once("?text=").expect("text parameter").1;
    let message = urlencoding::decode(encoded).expect("valid encoding");

    assert!(link.starts_with("https://wa.me/5493415850155?text="));
    assert!(message.contains("- 2x Mate Imperial — $ 30.000"));
    assert!(message.contains("- 1x Bombilla Pico de Loro — $ 8.500"));
    assert!(message.contains("Total: $ 38.500"));
}

#[test]
fn clearing_the_cart_clears_the_persisted_copy_too() {
    let storage = Arc::new(MemoryStore::new());

    {
        let mut cart = CartStore::load(Box::new(Arc::clone(&storage)));
        cart.add_to_cart(fallback_products()[0].clone());
        cart.clear();
    }

    let cart = CartStore::load(Box::new(storage));
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Price::ZERO);
}
