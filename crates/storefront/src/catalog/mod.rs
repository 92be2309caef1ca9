//! Catalog derivation: the filter/sort engine and the interactive search
//! box model.
//!
//! Everything in this module is a pure function of (product list, state);
//! nothing here mutates the input list or talks to the network. The
//! [`source`] submodule is the one place that fetches, and it degrades to
//! the built-in fallback catalog on any failure.

pub mod debounce;
pub mod engine;
pub mod search_box;
pub mod source;
pub mod suggest;

pub use debounce::SearchDebouncer;
pub use engine::{FilterState, SortOption};
pub use search_box::SearchBox;
pub use source::CatalogSource;
pub use suggest::{NavKey, SuggestionNav};
