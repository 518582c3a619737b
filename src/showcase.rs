//! Debounced active-item selection for the showcase panels.
//!
//! Each showcase (features, FAQ, changelog) owns one [`ShowcaseState`] over
//! its ordered item list. Selection requests are debounced through a
//! [`DebounceTimer`] so that skimming quickly across the list does not
//! flicker the detail panel: only the most recent request commits, 120ms
//! after it was made. While a commit is pending the panel renders dimmed
//! (the terminal's cross-fade).

use std::time::{Duration, Instant};

use crate::timer::DebounceTimer;

/// Debounce window between a selection request and its commit.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(120);

/// An item that can be the active element of a showcase.
///
/// The key is a stable identity (version string, question text, feature id);
/// identity equality, not structural equality, decides whether a request
/// targets the item that is already active.
pub trait Selectable {
    fn key(&self) -> &str;
}

/// Debounced "which item is active" state over an ordered item list.
#[derive(Debug, Clone)]
pub struct ShowcaseState<T: Selectable> {
    items: Vec<T>,
    active_index: usize,
    pending_index: Option<usize>,
    timer: DebounceTimer,
}

impl<T: Selectable> ShowcaseState<T> {
    /// Create a showcase with the first item active.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty; a showcase always has an active item.
    pub fn new(items: Vec<T>) -> Self {
        assert!(!items.is_empty(), "showcase requires at least one item");
        Self {
            items,
            active_index: 0,
            pending_index: None,
            timer: DebounceTimer::new(TRANSITION_DELAY),
        }
    }

    /// The ordered item list.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The committed active item.
    pub fn active(&self) -> &T {
        &self.items[self.active_index]
    }

    /// Index of the committed active item.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// True between a selection request and its commit.
    pub fn is_transitioning(&self) -> bool {
        self.pending_index.is_some()
    }

    /// Index the list cursor should highlight: the pending target if a
    /// commit is in flight, otherwise the active item.
    pub fn highlight_index(&self) -> usize {
        self.pending_index.unwrap_or(self.active_index)
    }

    /// Request activation of the item at `index` (hover-enter or click).
    ///
    /// Requests for the already-active item are no-ops: they never set the
    /// transitioning flag and never restart the commit timer. Any other
    /// request replaces a pending one outright (last-write-wins debounce,
    /// not a queue).
    pub fn request_activation(&mut self, index: usize, now: Instant) {
        let Some(candidate) = self.items.get(index) else {
            return;
        };
        if candidate.key() == self.active().key() {
            return;
        }
        self.pending_index = Some(index);
        self.timer.schedule(now);
    }

    /// Request activation of the item before the highlighted one.
    pub fn select_previous(&mut self, now: Instant) {
        let current = self.highlight_index();
        if current > 0 {
            self.request_activation(current - 1, now);
        }
    }

    /// Request activation of the item after the highlighted one.
    pub fn select_next(&mut self, now: Instant) {
        let current = self.highlight_index();
        if current + 1 < self.items.len() {
            self.request_activation(current + 1, now);
        }
    }

    /// Poll the commit timer; commits the pending item when its 120ms
    /// window has elapsed.
    ///
    /// Returns `true` when the active item changed (redraw needed).
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        // The timer only arms together with a pending index
        let Some(index) = self.pending_index.take() else {
            return false;
        };
        self.active_index = index;
        tracing::debug!(index, key = self.active().key(), "showcase commit");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Entry(&'static str);

    impl Selectable for Entry {
        fn key(&self) -> &str {
            self.0
        }
    }

    fn showcase() -> ShowcaseState<Entry> {
        ShowcaseState::new(vec![Entry("alpha"), Entry("beta"), Entry("gamma")])
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_at_first_item() {
        let state = showcase();
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.active().key(), "alpha");
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_activation_commits_after_delay() {
        let start = Instant::now();
        let mut state = showcase();

        state.request_activation(2, start);
        assert!(state.is_transitioning());
        assert_eq!(state.active().key(), "alpha"); // not yet committed

        assert!(!state.tick(start + ms(119)));
        assert_eq!(state.active().key(), "alpha");

        assert!(state.tick(start + ms(120)));
        assert_eq!(state.active().key(), "gamma");
        assert_eq!(state.active_index(), 2);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_active_item_request_is_idempotent() {
        let start = Instant::now();
        let mut state = showcase();

        state.request_activation(0, start);
        assert!(!state.is_transitioning());
        assert!(!state.tick(start + ms(500)));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_debounce_replacement_last_write_wins() {
        let start = Instant::now();
        let mut state = showcase();

        state.request_activation(1, start);
        state.request_activation(2, start + ms(60));

        // The superseded request for index 1 must never commit
        assert!(!state.tick(start + ms(120)));
        assert_eq!(state.active().key(), "alpha");

        assert!(state.tick(start + ms(180)));
        assert_eq!(state.active().key(), "gamma");
    }

    #[test]
    fn test_timer_exactness_single_commit() {
        let start = Instant::now();
        let mut state = showcase();

        state.request_activation(1, start);
        state.request_activation(2, start + ms(119));

        let mut commits = 0;
        for t in (120..=300).step_by(10) {
            if state.tick(start + ms(t)) {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
        assert_eq!(state.active().key(), "gamma");
    }

    #[test]
    fn test_out_of_range_request_ignored() {
        let start = Instant::now();
        let mut state = showcase();

        state.request_activation(7, start);
        assert!(!state.is_transitioning());
        assert!(!state.tick(start + ms(200)));
    }

    #[test]
    fn test_highlight_tracks_pending_target() {
        let start = Instant::now();
        let mut state = showcase();

        assert_eq!(state.highlight_index(), 0);
        state.request_activation(2, start);
        assert_eq!(state.highlight_index(), 2);
        assert_eq!(state.active_index(), 0);

        state.tick(start + ms(120));
        assert_eq!(state.highlight_index(), 2);
    }

    #[test]
    fn test_select_next_and_previous_walk_from_highlight() {
        let start = Instant::now();
        let mut state = showcase();

        state.select_next(start);
        state.select_next(start + ms(10));
        // Two rapid moves: highlight walked 0 -> 1 -> 2, nothing committed
        assert_eq!(state.highlight_index(), 2);
        assert_eq!(state.active_index(), 0);

        assert!(state.tick(start + ms(130)));
        assert_eq!(state.active_index(), 2);

        state.select_next(start + ms(200)); // clamped at the end
        assert!(!state.is_transitioning());

        state.select_previous(start + ms(200));
        assert!(state.tick(start + ms(320)));
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn test_empty_showcase_panics() {
        let _ = ShowcaseState::<Entry>::new(Vec::new());
    }
}
