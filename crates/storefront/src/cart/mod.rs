//! The cart store: cart contents and theme preference, with durable
//! local persistence.

pub mod persist;
pub mod store;

pub use persist::{FileStore, MemoryStore, StateStore, keys};
pub use store::{CartItem, CartStore};
