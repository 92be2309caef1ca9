//! Debounced search text.
//!
//! The committed search text - the value the filter pipeline actually
//! uses - lags the raw input by a fixed quiet period. Each keystroke
//! supersedes the previous pending commit, so at most one timer is
//! outstanding, and the filter re-runs once when typing stops rather
//! than on every keystroke.
//!
//! The model is cooperative: callers pass `Instant`s in, which keeps it
//! deterministic under test. The rendered store page drives the same
//! quiet period through its fragment-refresh trigger.

use std::time::{Duration, Instant};

/// Quiet period before raw input becomes the committed search text.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Instant,
}

/// The debounce state: committed text plus at most one pending commit.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    committed: String,
    pending: Option<Pending>,
    delay: Duration,
}

impl SearchDebouncer {
    /// An empty debouncer with the standard [`DEBOUNCE_DELAY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    /// An empty debouncer with a custom quiet period.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            committed: String::new(),
            pending: None,
            delay,
        }
    }

    /// Record a keystroke at `now`, cancelling any pending commit and
    /// scheduling a new one for `now + delay`.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            text: text.into(),
            deadline: now + self.delay,
        });
    }

    /// Advance the clock to `now`, committing the pending text if its
    /// quiet period has elapsed. Returns `true` when the committed value
    /// actually changed - the caller's cue to re-run the filter pipeline.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.text == self.committed {
            return false;
        }
        self.committed = pending.text;
        true
    }

    /// The committed text the filter pipeline uses.
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// The raw text as typed: the pending value when one exists,
    /// otherwise the committed value. Suggestions derive from this.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.pending
            .as_ref()
            .map_or(&self.committed, |pending| &pending.text)
    }

    /// Whether a commit is still pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_of_keystrokes_commits_once_after_the_last() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        let mut commits = 0;
        for (i, text) in ["m", "ma", "mat", "mate", "mates"].iter().enumerate() {
            let at = start + ms(100 * i as u64);
            debouncer.input(*text, at);
            if debouncer.poll(at) {
                commits += 1;
            }
        }
        assert_eq!(commits, 0);
        assert_eq!(debouncer.committed(), "");
        assert_eq!(debouncer.raw(), "mates");

        // Just before the quiet period of the last keystroke ends: nothing.
        assert!(!debouncer.poll(start + ms(400 + 299)));
        // At the deadline: exactly one commit.
        assert!(debouncer.poll(start + ms(400 + 300)));
        assert_eq!(debouncer.committed(), "mates");

        // Further polls are no-ops.
        assert!(!debouncer.poll(start + ms(1000)));
    }

    #[test]
    fn each_keystroke_restarts_the_delay() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.input("bom", start);
        assert!(!debouncer.poll(start + ms(200)));
        debouncer.input("bombi", start + ms(250));
        // 300ms after the *first* keystroke, but the second superseded it.
        assert!(!debouncer.poll(start + ms(300)));
        assert!(debouncer.poll(start + ms(550)));
        assert_eq!(debouncer.committed(), "bombi");
    }

    #[test]
    fn committing_the_same_text_does_not_signal_a_change() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.input("mate", start);
        assert!(debouncer.poll(start + ms(300)));
        // Retyping the identical text quiesces without a second re-filter.
        debouncer.input("mate", start + ms(400));
        assert!(!debouncer.poll(start + ms(800)));
        assert_eq!(debouncer.committed(), "mate");
    }

    #[test]
    fn raw_tracks_pending_then_committed() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();
        assert_eq!(debouncer.raw(), "");

        debouncer.input("ma", start);
        assert_eq!(debouncer.raw(), "ma");
        assert!(debouncer.is_pending());

        debouncer.poll(start + ms(300));
        assert_eq!(debouncer.raw(), "ma");
        assert!(!debouncer.is_pending());
    }
}
