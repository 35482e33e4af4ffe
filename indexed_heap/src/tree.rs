enum TreeDir {
    Left,
    Right,
}

// index arithmetic for a complete binary tree stored densely in `len` slots
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    len: usize,
}

impl Tree {
    pub fn with_len(len: usize) -> Self {
        Self { len }
    }

    // assumes self isn't empty
    pub fn root(&self) -> usize {
        0
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> Option<usize> {
        let child = match dir {
            TreeDir::Left => 2 * node + 1,
            TreeDir::Right => 2 * node + 2,
        };
        if child < self.len {
            Some(child)
        } else {
            None
        }
    }

    pub fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    // the deepest node that still has a child, i.e. the parent of the last slot
    pub fn last_internal(&self) -> Option<usize> {
        if self.len < 2 {
            None
        } else {
            self.parent(self.len - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;

    #[test]
    fn parent_of_root_is_none() {
        let tree = Tree::with_len(5);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(0));
        assert_eq!(tree.parent(4), Some(1));
    }

    #[test]
    fn children_stop_at_len() {
        let tree = Tree::with_len(5);
        assert_eq!(tree.children(0), (Some(1), Some(2)));
        assert_eq!(tree.children(1), (Some(3), Some(4)));
        assert_eq!(tree.children(2), (None, None));

        let tree = Tree::with_len(4);
        assert_eq!(tree.children(1), (Some(3), None));
    }

    #[test]
    fn last_internal() {
        assert_eq!(Tree::with_len(0).last_internal(), None);
        assert_eq!(Tree::with_len(1).last_internal(), None);
        assert_eq!(Tree::with_len(2).last_internal(), Some(0));
        assert_eq!(Tree::with_len(3).last_internal(), Some(0));
        assert_eq!(Tree::with_len(4).last_internal(), Some(1));
        assert_eq!(Tree::with_len(7).last_internal(), Some(2));
    }
}
