//! Theme switching.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use paraiso_core::Theme;

use crate::state::AppState;

/// Theme form data.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// "light" or "dark".
    pub theme: String,
    /// Path to return to.
    #[serde(default)]
    pub next: Option<String>,
}

/// Switch the persisted theme and go back.
///
/// Unknown theme names fall back to the default rather than erroring;
/// there is nothing useful to tell the shopper about a malformed toggle.
#[instrument(skip(state))]
pub async fn set(State(state): State<AppState>, Form(form): Form<ThemeForm>) -> Redirect {
    let theme: Theme = form.theme.parse().unwrap_or_default();
    state.cart().set_theme(theme);

    // Only same-site paths are followed; anything absolute goes home.
    let next = form
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());
    Redirect::to(&next)
}
