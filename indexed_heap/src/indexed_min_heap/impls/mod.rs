mod bulk;
mod serialize;

use super::IndexedMinHeap;
use crate::locator::Locator;
use crate::Entry;
use std::hash::Hash;

impl<K, V, P> IndexedMinHeap<K, V, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            locator: Locator::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            locator: Locator::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the lowest priority, without removing it.
    pub fn get_next(&self) -> Option<&Entry<K, V, P>> {
        self.entries.first()
    }

    /// All entries in array order. Only the first one is guaranteed to be
    /// the minimum.
    pub fn get_all(&self) -> &[Entry<K, V, P>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, V, P>> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        log::debug!("clearing {} entries", self.entries.len());
        self.entries.clear();
        self.locator.clear();
    }
}

impl<K: Eq + Hash + Clone, V, P: PartialOrd> IndexedMinHeap<K, V, P> {
    pub fn get(&self, key: &K) -> Option<&Entry<K, V, P>> {
        let position = self.locator.position(key)?;
        self.entries.get(position)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.locator.position(key).is_some()
    }

    /// Inserts a new entry, or overwrites the value and priority of the entry
    /// already stored under `key`.
    pub fn put(&mut self, key: K, value: V, priority: P) {
        match self.locator.position(&key) {
            Some(position) => {
                log::trace!("updating entry at position {position}");
                let entry = &mut self.entries[position];
                entry.value = value;
                entry.priority = priority;
                self.resift(position);
            }
            None => {
                let position = self.entries.len();
                log::trace!("inserting entry at position {position}");
                self.locator.insert(key.clone(), position);
                self.entries.push(Entry::new(key, value, priority));
                self.bubble_up(position);
            }
        }
    }

    pub fn put_entry(&mut self, entry: Entry<K, V, P>) {
        self.put(entry.key, entry.value, entry.priority);
    }

    /// Removes the entry stored under `key`. Does nothing if there is none.
    pub fn remove(&mut self, key: &K) {
        self.take(key);
    }

    /// Removes and returns the entry stored under `key`.
    pub fn take(&mut self, key: &K) -> Option<Entry<K, V, P>> {
        let position = self.locator.position(key)?;
        self.take_at(position)
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<Entry<K, V, P>> {
        if self.entries.is_empty() {
            None
        } else {
            let root = self.tree().root();
            self.take_at(root)
        }
    }

    fn take_at(&mut self, position: usize) -> Option<Entry<K, V, P>> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(position, last);
        let entry = self.entries.pop()?;
        self.locator.remove(&entry.key);
        log::trace!("removed entry from position {position}");
        // nothing to restore when the removed entry was the last slot
        if position < self.entries.len() {
            self.resift(position);
        }
        Some(entry)
    }
}

impl<'a, K, V, P> IntoIterator for &'a IndexedMinHeap<K, V, P> {
    type Item = &'a Entry<K, V, P>;
    type IntoIter = std::slice::Iter<'a, Entry<K, V, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
