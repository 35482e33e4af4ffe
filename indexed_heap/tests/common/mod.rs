use indexed_heap::IndexedMinHeap;
use std::fmt::Debug;
use std::hash::Hash;

// heap order over the public array view, and every key resolving to its own slot
pub fn assert_consistent<K, V, P>(heap: &IndexedMinHeap<K, V, P>)
where
    K: Eq + Hash + Clone + Debug,
    P: PartialOrd + Debug,
{
    let entries = heap.get_all();
    assert_eq!(entries.len(), heap.len());
    for (node, entry) in entries.iter().enumerate().skip(1) {
        let parent = &entries[(node - 1) / 2];
        assert!(
            !(entry.priority < parent.priority),
            "{:?} at {} is below its parent {:?}",
            entry.priority,
            node,
            parent.priority
        );
    }
    for entry in entries {
        let found = heap.get(&entry.key).map(|found| &found.key);
        assert_eq!(found, Some(&entry.key));
    }
}
