use super::Node;
use std::collections::VecDeque;

/// An iterator that traverses a tree of nodes in left-to-right level order (i.e. breadth-first).
///
/// This is the same order in which the rewrite engine searches for a node to simplify.
///
/// This iterator is created by [`Node::level_order_iter`].
pub struct LevelOrderIter<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrderIter<'a> {
    /// Creates a new iterator that traverses the tree of nodes in left-to-right level order
    /// (i.e. breadth-first).
    pub fn new(node: &'a Node) -> Self {
        Self {
            queue: VecDeque::from([node]),
        }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}
