//! Integration tests for Paraíso Matero.
//!
//! These tests exercise cross-module flows hermetically - the in-memory
//! state store stands in for the device-local files and no hosted
//! backend is involved:
//!
//! - `store_session` - a simulated store-page visit: typing into the
//!   search box, debounce commits, suggestion keyboard navigation, and
//!   the filter pipeline fed by the committed text
//! - `cart_checkout` - the cart flow from adds through the WhatsApp
//!   handoff link, including a persistence reload
//!
//! Run with: `cargo test -p paraiso-integration-tests`
