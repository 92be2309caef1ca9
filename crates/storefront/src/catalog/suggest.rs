//! Search suggestions and their keyboard-navigation state machine.

use paraiso_core::Product;

/// Suggestions only appear once the raw input reaches this length.
pub const MIN_QUERY_LEN: usize = 2;

/// At most this many suggestions are shown.
pub const MAX_SUGGESTIONS: usize = 5;

/// Derive the suggestion list for the raw (non-debounced) search text:
/// up to [`MAX_SUGGESTIONS`] products whose name contains the text
/// case-insensitively, in original list order.
#[must_use]
pub fn suggestions<'a>(products: &'a [Product], raw_query: &str) -> Vec<&'a Product> {
    if raw_query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = raw_query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// A key the suggestion dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Arrow down: advance the highlight, wrapping last -> first.
    Down,
    /// Arrow up: retreat the highlight, wrapping first -> last.
    Up,
    /// Commit the highlighted suggestion, if any.
    Enter,
    /// Close without committing.
    Escape,
}

/// The dropdown's state: closed, open without a highlight, or open with
/// row `i` highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum NavState {
    #[default]
    Closed,
    Open {
        highlighted: Option<usize>,
    },
}

/// Keyboard-navigation state machine for the suggestions dropdown.
///
/// Typing or focusing the field opens it; arrows move the highlight
/// circularly; Enter commits the highlighted row and closes; Escape and
/// clicking outside close without committing. The highlight resets
/// whenever the suggestion list is recomputed from new input, so a stale
/// index can never point at a different product than the one the shopper
/// saw highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuggestionNav {
    state: NavState,
}

impl SuggestionNav {
    /// A closed dropdown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: NavState::Closed,
        }
    }

    /// The shopper typed: the list is about to be recomputed, so open the
    /// dropdown and drop any highlight.
    pub fn on_input(&mut self) {
        self.state = NavState::Open { highlighted: None };
    }

    /// The shopper focused the field: open, keeping any highlight.
    pub fn on_focus(&mut self) {
        if matches!(self.state, NavState::Closed) {
            self.state = NavState::Open { highlighted: None };
        }
    }

    /// The shopper clicked outside the search area.
    pub fn on_click_outside(&mut self) {
        self.state = NavState::Closed;
    }

    /// Apply a key against a dropdown currently showing `visible_count`
    /// rows. Returns the index to commit when the key was Enter on a
    /// highlighted row; every other transition returns `None`.
    ///
    /// Keys are ignored entirely while the dropdown is closed or empty,
    /// matching how the field behaves with nothing to navigate.
    pub fn on_key(&mut self, key: NavKey, visible_count: usize) -> Option<usize> {
        let NavState::Open { highlighted } = self.state else {
            return None;
        };
        if visible_count == 0 {
            return None;
        }

        match key {
            NavKey::Down => {
                let next = match highlighted {
                    Some(i) if i + 1 < visible_count => i + 1,
                    // Wraps from the last row, and enters at the top when
                    // nothing is highlighted yet.
                    _ => 0,
                };
                self.state = NavState::Open {
                    highlighted: Some(next),
                };
                None
            }
            NavKey::Up => {
                let next = match highlighted {
                    Some(i) if i > 0 => i - 1,
                    _ => visible_count - 1,
                };
                self.state = NavState::Open {
                    highlighted: Some(next),
                };
                None
            }
            NavKey::Enter => {
                if let Some(i) = highlighted {
                    self.state = NavState::Closed;
                    Some(i)
                } else {
                    None
                }
            }
            NavKey::Escape => {
                self.state = NavState::Closed;
                None
            }
        }
    }

    /// Currently highlighted row, if the dropdown is open and has one.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        match self.state {
            NavState::Open { highlighted } => highlighted,
            NavState::Closed => None,
        }
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, NavState::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use paraiso_core::fallback_products;

    use super::*;

    #[test]
    fn no_suggestions_under_two_chars() {
        let products = fallback_products();
        assert!(suggestions(&products, "").is_empty());
        assert!(suggestions(&products, "m").is_empty());
        assert!(!suggestions(&products, "ma").is_empty());
    }

    #[test]
    fn suggestions_match_name_only_in_list_order() {
        let products = fallback_products();
        let result = suggestions(&products, "MATE");
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        // "Set Matero" matches on the name; descriptions never count here.
        assert_eq!(names, vec!["Mate Imperial", "Mate Torpedo", "Set Matero"]);
    }

    #[test]
    fn suggestions_are_capped_at_five() {
        let mut products = fallback_products();
        let extra = products.clone();
        products.extend(extra);
        assert!(suggestions(&products, "mate").len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn arrows_wrap_circularly() {
        let mut nav = SuggestionNav::new();
        nav.on_input();

        assert_eq!(nav.on_key(NavKey::Down, 3), None);
        assert_eq!(nav.highlighted(), Some(0));
        nav.on_key(NavKey::Down, 3);
        nav.on_key(NavKey::Down, 3);
        assert_eq!(nav.highlighted(), Some(2));
        nav.on_key(NavKey::Down, 3);
        assert_eq!(nav.highlighted(), Some(0)); // wrapped

        nav.on_key(NavKey::Up, 3);
        assert_eq!(nav.highlighted(), Some(2)); // wrapped back
    }

    #[test]
    fn arrow_up_from_no_highlight_lands_on_last() {
        let mut nav = SuggestionNav::new();
        nav.on_input();
        nav.on_key(NavKey::Up, 4);
        assert_eq!(nav.highlighted(), Some(3));
    }

    #[test]
    fn enter_commits_only_with_a_highlight() {
        let mut nav = SuggestionNav::new();
        nav.on_input();

        assert_eq!(nav.on_key(NavKey::Enter, 3), None);
        assert!(nav.is_open());

        nav.on_key(NavKey::Down, 3);
        assert_eq!(nav.on_key(NavKey::Enter, 3), Some(0));
        assert!(!nav.is_open());
    }

    #[test]
    fn escape_and_click_outside_close_without_committing() {
        let mut nav = SuggestionNav::new();
        nav.on_input();
        nav.on_key(NavKey::Down, 2);

        assert_eq!(nav.on_key(NavKey::Escape, 2), None);
        assert!(!nav.is_open());

        nav.on_focus();
        nav.on_click_outside();
        assert!(!nav.is_open());
    }

    #[test]
    fn input_resets_the_highlight() {
        let mut nav = SuggestionNav::new();
        nav.on_input();
        nav.on_key(NavKey::Down, 3);
        nav.on_key(NavKey::Down, 3);
        assert_eq!(nav.highlighted(), Some(1));

        nav.on_input();
        assert!(nav.is_open());
        assert_eq!(nav.highlighted(), None);
    }

    #[test]
    fn keys_are_ignored_while_closed_or_empty() {
        let mut nav = SuggestionNav::new();
        assert_eq!(nav.on_key(NavKey::Down, 3), None);
        assert!(!nav.is_open());

        nav.on_input();
        nav.on_key(NavKey::Down, 0);
        assert_eq!(nav.highlighted(), None);
    }
}
