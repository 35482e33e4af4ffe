use super::{IndexedMinHeap, Locator};
use crate::{Entry, HeapError};
use std::hash::Hash;

impl<K: Eq + Hash + Clone, V, P: PartialOrd> IndexedMinHeap<K, V, P> {
    /// Replaces the contents of the heap with exactly `entries`, in O(n).
    ///
    /// Keys must be unique. On a duplicate the heap is left as it was and
    /// the positions of both occurrences are reported.
    pub fn initialize<I>(&mut self, entries: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = Entry<K, V, P>>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        let locator = Locator::rebuild(&entries).map_err(|err| {
            log::warn!("rejecting {} initial entries: {err}", entries.len());
            err
        })?;
        self.entries = entries;
        self.locator = locator;
        self.heapify();
        log::debug!("initialized heap with {} entries", self.entries.len());
        Ok(())
    }

    pub fn from_entries(entries: Vec<Entry<K, V, P>>) -> Result<Self, HeapError> {
        let mut heap = Self::new();
        heap.initialize(entries)?;
        Ok(heap)
    }

    /// Drains the heap in non-decreasing priority order.
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, V, P>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }
}

// goes through `put`, so a repeated key keeps its last occurrence
impl<K: Eq + Hash + Clone, V, P: PartialOrd> Extend<Entry<K, V, P>> for IndexedMinHeap<K, V, P> {
    fn extend<I: IntoIterator<Item = Entry<K, V, P>>>(&mut self, iter: I) {
        for entry in iter {
            self.put_entry(entry);
        }
    }
}

impl<K: Eq + Hash + Clone, V, P: PartialOrd> FromIterator<Entry<K, V, P>>
    for IndexedMinHeap<K, V, P>
{
    fn from_iter<I: IntoIterator<Item = Entry<K, V, P>>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
