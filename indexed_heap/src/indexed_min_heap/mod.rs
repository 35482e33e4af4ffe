mod impls;
mod sift;

use crate::locator::Locator;
use crate::Entry;

/// A binary min-heap whose entries can be looked up, updated and removed by
/// key.
///
/// Entries live in a dense array in heap order (root at position 0, children
/// of `i` at `2i + 1` and `2i + 2`). A locator keeps every key's current
/// position, and every move inside the array goes through a single swap that
/// updates both, so `get`, `put` and `remove` find their slot in O(1) and
/// then only pay for the sift.
///
/// Priorities only need `<`. Entries with equal priorities come out in no
/// particular order.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, V, P> {
    entries: Vec<Entry<K, V, P>>,
    locator: Locator<K>,
}

impl<K, V, P> Default for IndexedMinHeap<K, V, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<K, V, P> IndexedMinHeap<K, V, P>
where
    K: Eq + std::hash::Hash + Clone + std::fmt::Debug,
    P: PartialOrd + std::fmt::Debug,
{
    pub(crate) fn assert_invariants(&self) {
        let tree = crate::tree::Tree::with_len(self.entries.len());
        for (node, entry) in self.entries.iter().enumerate() {
            if let Some(parent) = tree.parent(node) {
                let parent_entry = &self.entries[parent];
                assert!(
                    !(entry.priority < parent_entry.priority),
                    "{:?} at {} is below its parent {:?}",
                    entry.priority,
                    node,
                    parent_entry.priority
                );
            }
            assert_eq!(self.locator.position(&entry.key), Some(node));
        }
        assert_eq!(self.locator.len(), self.entries.len());
    }
}
