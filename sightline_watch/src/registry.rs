// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use hashbrown::HashMap;

use crate::source::RectSource;
use crate::watcher::Watcher;

/// Explicit mapping from host element keys to their watchers.
///
/// Hosts that track many elements own one registry at the adapter layer,
/// keyed by whatever identifies an element there (a node id, a widget handle,
/// an index). Watchers are created and removed explicitly; dropping an entry
/// tears its tracking down. The registry replaces implicit per-element
/// instance caches: the engine itself never keeps one.
#[derive(Debug)]
pub struct WatchRegistry<K, S: RectSource> {
    watchers: HashMap<K, Watcher<S>>,
}

impl<K, S: RectSource> Default for WatchRegistry<K, S> {
    fn default() -> Self {
        Self {
            watchers: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, S: RectSource> WatchRegistry<K, S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a watcher under `key`, returning any watcher it replaced.
    pub fn insert(&mut self, key: K, watcher: Watcher<S>) -> Option<Watcher<S>> {
        self.watchers.insert(key, watcher)
    }

    /// Returns the watcher for `key`, if registered.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Watcher<S>> {
        self.watchers.get(key)
    }

    /// Returns the watcher for `key` mutably, if registered.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut Watcher<S>> {
        self.watchers.get_mut(key)
    }

    /// Removes and returns the watcher for `key`, ending its tracking.
    pub fn remove(&mut self, key: &K) -> Option<Watcher<S>> {
        self.watchers.remove(key)
    }

    /// Returns `true` if a watcher is registered under `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.watchers.contains_key(key)
    }

    /// Number of registered watchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    /// Returns `true` when no watchers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    /// Forces a recompute on every registered watcher.
    ///
    /// Useful after bulk geometry changes (layout pass, container swap) where
    /// per-element triggers would be redundant.
    pub fn refresh_all(&mut self) {
        for watcher in self.watchers.values_mut() {
            watcher.refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WatchRegistry;
    use crate::source::{RectSource, viewport_rect};
    use crate::watcher::{WatchCallbacks, WatchOptions, Watcher};
    use kurbo::Rect;

    #[derive(Clone, Copy, Debug)]
    struct Fixed {
        element: Rect,
    }

    impl RectSource for Fixed {
        fn container_rect(&self) -> Rect {
            viewport_rect(1000.0, 800.0)
        }
        fn element_rect(&self) -> Rect {
            self.element
        }
    }

    fn watcher(element: Rect) -> Watcher<Fixed> {
        Watcher::new(
            Fixed { element },
            WatchOptions::default(),
            WatchCallbacks::default(),
        )
    }

    #[test]
    fn insert_get_remove_round_trip() {
        let mut registry = WatchRegistry::new();
        assert!(registry.is_empty());

        registry.insert(7_u32, watcher(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&7));
        assert!(registry.get(&7).is_some());

        let removed = registry.remove(&7);
        assert!(removed.is_some());
        assert!(!registry.contains(&7));
    }

    #[test]
    fn insert_replaces_existing_watcher() {
        let mut registry = WatchRegistry::new();
        registry.insert(1_u32, watcher(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let replaced = registry.insert(1_u32, watcher(Rect::new(0.0, 900.0, 100.0, 1000.0)));
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 1);
        assert!(!registry.get(&1).is_some_and(Watcher::visible));
    }

    #[test]
    fn refresh_all_recomputes_every_watcher() {
        let mut registry = WatchRegistry::new();
        registry.insert(1_u32, watcher(Rect::new(0.0, 0.0, 100.0, 100.0)));
        registry.insert(2_u32, watcher(Rect::new(0.0, 900.0, 100.0, 1000.0)));

        // Move the second element into view, then refresh everything.
        registry.get_mut(&2).unwrap().source_mut().element = Rect::new(0.0, 100.0, 100.0, 200.0);
        registry.refresh_all();

        assert!(registry.get(&1).unwrap().visible());
        assert!(registry.get(&2).unwrap().visible());
    }
}
