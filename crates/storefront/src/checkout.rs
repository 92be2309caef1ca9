//! Checkout handoff to WhatsApp.
//!
//! There is no payment flow: checkout builds a `wa.me` deep link
//! pre-filled with the order as text, and the shop coordinates payment
//! and shipping over chat. The link opens in a new browsing context; no
//! response is awaited or parsed.

use paraiso_core::Price;

use crate::cart::CartItem;

const GREETING: &str = "¡Hola!";
const INTRO: &str = "Me gustaría comprar:";
const TOTAL_LABEL: &str = "Total:";
const CLOSING: &str = "Muchas gracias";

/// Build the pre-filled WhatsApp deep link for a cart.
///
/// Message shape, one line per item with its line total:
///
/// ```text
/// ¡Hola! Me gustaría comprar:
/// - 2x Mate Imperial — $ 30.000
/// Total: $ 30.000
/// Muchas gracias
/// ```
#[must_use]
pub fn whatsapp_link(number: &str, items: &[CartItem]) -> String {
    let lines: String = items
        .iter()
        .map(|item| {
            format!(
                "- {}x {} — {}\n",
                item.quantity,
                item.product.name,
                item.line_total()
            )
        })
        .collect();
    let total: Price = items.iter().map(CartItem::line_total).sum();

    let message = format!("{GREETING} {INTRO}\n{lines}{TOTAL_LABEL} {total}\n{CLOSING}");

    format!("https://wa.me/{number}?text={}", urlencoding::encode(&message))
}

#[cfg(test)]
mod tests {
    use paraiso_core::fallback_products;

    use super::*;

    fn cart() -> Vec<CartItem> {
        let products = fallback_products();
        vec![
            CartItem {
                product: products.first().expect("fallback product").clone(),
                quantity: 2,
            },
            CartItem {
                product: products.get(2).expect("fallback product").clone(),
                quantity: 1,
            },
        ]
    }

    #[test]
    fn link_targets_the_configured_number() {
        let link = whatsapp_link("5493415850155", &cart());
        assert!(link.starts_with("https://wa.me/5493415850155?text="));
    }

    #[test]
    fn message_lists_line_totals_and_the_cart_total() {
        let link = whatsapp_link("5493415850155", &cart());
        let encoded = link.split_once("?text=").expect("query").1;
        let message = urlencoding::decode(encoded).expect("valid encoding");

        assert!(message.starts_with("¡Hola! Me gustaría comprar:\n"));
        assert!(message.contains("- 2x Mate Imperial — $ 30.000\n"));
        assert!(message.contains("- 1x Bombilla Pico de Loro — $ 8.500\n"));
        assert!(message.contains("Total: $ 38.500\n"));
        assert!(message.ends_with("Muchas gracias"));
    }

    #[test]
    fn message_body_is_percent_encoded() {
        let link = whatsapp_link("549000", &cart());
        let encoded = link.split_once("?text=").expect("query").1;
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
    }
}
