//! Previous-value gate for change notifications.
//!
//! Reactive effects run once on mount with the initial value. `ValueWatch`
//! remembers the last value it saw so only later, distinct values are
//! reported to callers.

#[cfg(test)]
#[path = "value_watch_test.rs"]
mod value_watch_test;

#[derive(Clone, Debug)]
pub struct ValueWatch<T> {
    previous: Option<T>,
}

impl<T> Default for ValueWatch<T> {
    fn default() -> Self {
        Self { previous: None }
    }
}

impl<T: Clone + PartialEq> ValueWatch<T> {
    /// Record `next`, returning it when it replaces a different earlier value.
    ///
    /// The first observation only seeds the watch and returns `None`.
    pub fn observe(&mut self, next: &T) -> Option<T> {
        let changed = self.previous.as_ref().is_some_and(|prev| prev != next);
        self.previous = Some(next.clone());
        changed.then(|| next.clone())
    }
}
