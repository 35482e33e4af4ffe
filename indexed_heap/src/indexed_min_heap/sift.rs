use super::IndexedMinHeap;
use crate::tree::Tree;
use std::hash::Hash;

impl<K: Eq + Hash + Clone, V, P: PartialOrd> IndexedMinHeap<K, V, P> {
    pub(super) fn tree(&self) -> Tree {
        Tree::with_len(self.entries.len())
    }

    fn less(&self, lhs: usize, rhs: usize) -> bool {
        self.entries[lhs].priority < self.entries[rhs].priority
    }

    // the only way entries move, so the locator never lags the array
    pub(super) fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.locator.relocate(&self.entries[a].key, a);
        self.locator.relocate(&self.entries[b].key, b);
    }

    pub(super) fn bubble_up(&mut self, mut node: usize) {
        let tree = self.tree();
        while let Some(parent) = tree.parent(node) {
            if !self.less(node, parent) {
                break;
            }
            self.swap(node, parent);
            node = parent;
        }
    }

    pub(super) fn bubble_down(&mut self, mut node: usize) {
        let tree = self.tree();
        loop {
            let mut smallest = node;
            let (left, right) = tree.children(node);
            if let Some(left) = left {
                if self.less(left, smallest) {
                    smallest = left;
                }
            }
            // on a tie with the left child, the left one stays chosen
            if let Some(right) = right {
                if self.less(right, smallest) {
                    smallest = right;
                }
            }
            if smallest == node {
                break;
            }
            self.swap(node, smallest);
            node = smallest;
        }
    }

    // the priority at `node` may have moved either way; at most one of these does work
    pub(super) fn resift(&mut self, node: usize) {
        self.bubble_up(node);
        self.bubble_down(node);
    }

    pub(super) fn heapify(&mut self) {
        if let Some(last_internal) = self.tree().last_internal() {
            for node in (0..=last_internal).rev() {
                self.bubble_down(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IndexedMinHeap;
    use crate::locator::Locator;
    use crate::Entry;

    fn raw(entries: Vec<Entry<char, (), u32>>) -> IndexedMinHeap<char, (), u32> {
        let locator = Locator::rebuild(&entries).unwrap();
        IndexedMinHeap { entries, locator }
    }

    fn keys(heap: &IndexedMinHeap<char, (), u32>) -> String {
        heap.entries.iter().map(|entry| entry.key).collect()
    }

    #[test]
    fn swap_moves_locator_with_entries() {
        let mut heap = raw(vec![Entry::new('a', (), 1), Entry::new('b', (), 2)]);
        heap.swap(0, 1);
        assert_eq!(keys(&heap), "ba");
        assert_eq!(heap.locator.position(&'a'), Some(1));
        assert_eq!(heap.locator.position(&'b'), Some(0));
    }

    #[test]
    fn bubble_down_prefers_left_on_tie() {
        let mut heap = raw(vec![
            Entry::new('r', (), 5),
            Entry::new('l', (), 1),
            Entry::new('x', (), 1),
        ]);
        heap.bubble_down(0);
        assert_eq!(keys(&heap), "lrx");
        heap.assert_invariants();
    }

    #[test]
    fn bubble_down_takes_strictly_smaller_right() {
        let mut heap = raw(vec![
            Entry::new('r', (), 5),
            Entry::new('l', (), 2),
            Entry::new('x', (), 1),
        ]);
        heap.bubble_down(0);
        assert_eq!(keys(&heap), "xlr");
        heap.assert_invariants();
    }

    #[test]
    fn bubble_down_sinks_to_leaf() {
        let mut heap = raw(vec![
            Entry::new('a', (), 9),
            Entry::new('b', (), 1),
            Entry::new('c', (), 4),
            Entry::new('d', (), 2),
            Entry::new('e', (), 3),
        ]);
        heap.bubble_down(0);
        assert_eq!(keys(&heap), "bdcae");
        heap.assert_invariants();
    }

    #[test]
    fn bubble_up_stops_at_equal_parent() {
        let mut heap = raw(vec![
            Entry::new('a', (), 1),
            Entry::new('b', (), 3),
            Entry::new('c', (), 4),
            Entry::new('d', (), 3),
        ]);
        heap.bubble_up(3);
        assert_eq!(keys(&heap), "abcd");

        heap.entries[3].priority = 0;
        heap.bubble_up(3);
        assert_eq!(keys(&heap), "dacb");
        heap.assert_invariants();
    }

    #[test]
    fn heapify_orders_reversed_input() {
        let mut heap = raw(
            ('a'..='j')
                .zip((0..10).rev())
                .map(|(key, priority)| Entry::new(key, (), priority))
                .collect(),
        );
        heap.heapify();
        heap.assert_invariants();
        assert_eq!(heap.entries[0].key, 'j');
    }
}
