use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Series filter shared by every chart bound to the same dataset.
///
/// One owned value behind a lock. The legend writes through this handle;
/// charts hold [`SeriesFilterObserver`]s that can only read. Every effective
/// write bumps a revision so observers can detect changes on their next
/// interaction.
#[derive(Debug, Clone, Default)]
pub struct SeriesFilterGroup {
    inner: Arc<RwLock<FilterState>>,
}

#[derive(Debug, Default)]
struct FilterState {
    selected: Option<String>,
    revision: u64,
}

impl SeriesFilterGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, FilterState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FilterState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets the active series. Returns `true` when the value changed.
    pub fn set(&self, series: Option<String>) -> bool {
        let mut state = self.write();
        if state.selected == series {
            return false;
        }
        state.selected = series;
        state.revision = state.revision.wrapping_add(1);
        true
    }

    pub fn clear(&self) -> bool {
        self.set(None)
    }

    /// Legend toggle: selecting the active series clears the filter,
    /// anything else makes `series` the active one.
    ///
    /// Returns the filter value after the toggle.
    pub fn toggle(&self, series: &str) -> Option<String> {
        let mut state = self.write();
        let next = match state.selected.as_deref() {
            Some(active) if active == series => None,
            _ => Some(series.to_owned()),
        };
        state.selected.clone_from(&next);
        state.revision = state.revision.wrapping_add(1);
        next
    }

    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.read().selected.clone()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    /// Creates a read-only handle that starts in sync with the current value.
    #[must_use]
    pub fn observer(&self) -> SeriesFilterObserver {
        SeriesFilterObserver {
            group: self.clone(),
            seen_revision: self.revision(),
        }
    }
}

/// Read-only view of a [`SeriesFilterGroup`].
#[derive(Debug, Clone)]
pub struct SeriesFilterObserver {
    group: SeriesFilterGroup,
    seen_revision: u64,
}

impl SeriesFilterObserver {
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.group.current()
    }

    /// Runs `f` against the live value without cloning it.
    pub fn with_current<T>(&self, f: impl FnOnce(Option<&str>) -> T) -> T {
        let state = self.group.read();
        f(state.selected.as_deref())
    }

    #[must_use]
    pub fn has_pending_change(&self) -> bool {
        self.group.revision() != self.seen_revision
    }

    /// Returns the new value when the filter changed since the last poll.
    pub fn poll_change(&mut self) -> Option<Option<String>> {
        let state = self.group.read();
        if state.revision == self.seen_revision {
            return None;
        }
        self.seen_revision = state.revision;
        Some(state.selected.clone())
    }

    /// Returns `true` when both handles observe the same group.
    #[must_use]
    pub fn is_bound_to(&self, group: &SeriesFilterGroup) -> bool {
        Arc::ptr_eq(&self.group.inner, &group.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selects_then_clears() {
        let group = SeriesFilterGroup::new();
        assert_eq!(group.toggle("A"), Some("A".to_owned()));
        assert_eq!(group.toggle("B"), Some("B".to_owned()));
        assert_eq!(group.toggle("B"), None);
        assert_eq!(group.current(), None);
    }

    #[test]
    fn set_to_same_value_does_not_bump_revision() {
        let group = SeriesFilterGroup::new();
        assert!(group.set(Some("A".to_owned())));
        let revision = group.revision();
        assert!(!group.set(Some("A".to_owned())));
        assert_eq!(group.revision(), revision);
    }
}
