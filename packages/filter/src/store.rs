//! Owner of the current filter snapshot.
//!
//! The store is the single writer. Each change builds a new [`FilterState`]
//! and swaps in a fresh [`Arc`], so readers holding an older snapshot keep a
//! consistent value and can detect changes with [`Arc::ptr_eq`].

use std::fmt;
use std::sync::Arc;

use crime_map_filter_models::{FilterState, FilterUpdate};

/// Handle returned by [`FilterStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Arc<FilterState>)>;

/// Holds the current filter snapshot and the listeners observing it.
pub struct FilterStore {
    current: Arc<FilterState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl FilterStore {
    /// Creates a store with no active constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(FilterState::default())
    }

    /// Creates a store starting from `state`.
    #[must_use]
    pub fn with_state(state: FilterState) -> Self {
        Self {
            current: Arc::new(state),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<FilterState> {
        Arc::clone(&self.current)
    }

    /// Borrows the current state.
    #[must_use]
    pub fn get(&self) -> &FilterState {
        &self.current
    }

    /// Applies a single-field change.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn update(&mut self, update: FilterUpdate) -> bool {
        let next = self.current.with(update);
        self.replace(next)
    }

    /// Replaces the whole state.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn set(&mut self, state: FilterState) -> bool {
        self.replace(state)
    }

    /// Clears every constraint.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn reset(&mut self) -> bool {
        self.replace(FilterState::default())
    }

    /// Registers a listener called with each new snapshot.
    pub fn subscribe(&mut self, listener: impl Fn(&Arc<FilterState>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn replace(&mut self, next: FilterState) -> bool {
        if next == *self.current {
            return false;
        }

        log::debug!("Filter state changed: {next:?}");
        self.current = Arc::new(next);

        for (_, listener) in &self.listeners {
            listener(&self.current);
        }

        true
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crime_map_crime_models::{CrimeCategory, CrimeType, Weekday};

    #[test]
    fn update_replaces_snapshot() {
        let mut store = FilterStore::new();
        let before = store.snapshot();

        assert!(store.update(FilterUpdate::Weekday(Some(Weekday::Monday))));

        let after = store.snapshot();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.weekday, None);
        assert_eq!(after.weekday, Some(Weekday::Monday));
    }

    #[test]
    fn unchanged_value_keeps_snapshot() {
        let mut store = FilterStore::new();
        store.update(FilterUpdate::Weekday(Some(Weekday::Monday)));
        let before = store.snapshot();

        assert!(!store.update(FilterUpdate::Weekday(Some(Weekday::Monday))));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn category_change_resets_type_through_store() {
        let mut store = FilterStore::new();
        store.update(FilterUpdate::Category(Some(CrimeCategory::RoboDeCelular)));
        store.update(FilterUpdate::CrimeType(Some(CrimeType::HurtoDeCelular)));
        store.update(FilterUpdate::Category(Some(CrimeCategory::RoboArmado)));

        assert_eq!(store.get().category, Some(CrimeCategory::RoboArmado));
        assert_eq!(store.get().crime_type, None);
    }

    #[test]
    fn reset_clears_all_constraints() {
        let mut store = FilterStore::new();
        store.update(FilterUpdate::Year(Some("2021".to_string())));
        store.update(FilterUpdate::DateTo("2021-06-30".to_string()));

        assert!(store.reset());
        assert!(store.get().is_unconstrained());
        assert!(!store.reset());
    }

    #[test]
    fn listeners_see_each_new_snapshot() {
        let seen: Rc<RefCell<Vec<Option<Weekday>>>> = Rc::default();
        let mut store = FilterStore::new();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.weekday));

        store.update(FilterUpdate::Weekday(Some(Weekday::Friday)));
        store.update(FilterUpdate::Weekday(Some(Weekday::Friday)));
        store.reset();

        assert_eq!(*seen.borrow(), vec![Some(Weekday::Friday), None]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(FilterUpdate::Weekday(Some(Weekday::Sunday)));
        assert_eq!(seen.borrow().len(), 2);
    }
}
