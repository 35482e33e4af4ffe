use crate::{Entry, HeapError};
use std::collections::HashMap;
use std::hash::Hash;

/// Maps each live key to the slot its entry currently occupies.
#[derive(Debug, Clone)]
pub struct Locator<K> {
    positions: HashMap<K, usize>,
}

impl<K> Locator<K> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

impl<K: Eq + Hash + Clone> Locator<K> {
    /// Builds a locator for `entries` in one scan. Fails on the first key
    /// seen twice.
    pub fn rebuild<V, P>(entries: &[Entry<K, V, P>]) -> Result<Self, HeapError> {
        let mut locator = Self::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if let Some(first) = locator.positions.insert(entry.key.clone(), position) {
                return Err(HeapError::DuplicateKey {
                    first,
                    second: position,
                });
            }
        }
        Ok(locator)
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn insert(&mut self, key: K, position: usize) {
        self.positions.insert(key, position);
    }

    // assumes the key is already tracked
    pub fn relocate(&mut self, key: &K, position: usize) {
        let slot = self.positions.get_mut(key);
        debug_assert!(slot.is_some(), "relocating an untracked key");
        if let Some(slot) = slot {
            *slot = position;
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<usize> {
        self.positions.remove(key)
    }
}
