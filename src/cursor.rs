use crate::binary_search_tree::{NodeId, NodeRef, Tree};
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Start,
    // index into the trail
    At(usize),
    End,
}

/// Bidirectional in-order cursor over a [`Tree`].
///
/// Only descends as far as the next value needs. Produced nodes are kept in
/// an append-only trail, so stepping back never touches the tree.
///
/// # Example
/// ```rust
/// use binary_tree::Tree;
/// let tree = Tree::from_values([2, 1, 3]).unwrap();
/// let mut cursor = tree.cursor();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next());
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), Some(&2));
/// assert!(cursor.move_previous());
/// assert_eq!(cursor.current(), Some(&1));
/// assert!(!cursor.move_previous());
/// ```
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    // nodes whose left spine is already queued; top is the next value
    frontier: Vec<NodeId>,
    // nodes already produced, ascending
    trail: Vec<NodeId>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Self {
        let mut cursor = Self {
            tree,
            frontier: Vec::new(),
            trail: Vec::new(),
            position: Position::Start,
        };
        cursor.push_left_spine(tree.root());
        cursor
    }

    pub fn current(&self) -> Option<&'a T> {
        self.current_node().map(|node| node.value())
    }

    pub fn current_node(&self) -> Option<NodeRef<'a, T>> {
        match self.position {
            Position::At(i) => Some(self.tree.node_ref(self.trail[i])),
            Position::Start | Position::End => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.position {
            Position::At(i) => Some(i),
            Position::Start | Position::End => None,
        }
    }

    pub fn move_next(&mut self) -> bool {
        let next = match self.position {
            Position::End => return false,
            Position::Start => 0,
            Position::At(i) => i + 1,
        };
        if next < self.trail.len() {
            self.position = Position::At(next);
            return true;
        }
        self.advance()
    }

    /// Steps to the next smaller value. Returns `false` when stepping back
    /// from the smallest value (the cursor then sits before the start) or
    /// when already there.
    pub fn move_previous(&mut self) -> bool {
        match self.position {
            Position::Start => false,
            Position::At(0) => {
                self.position = Position::Start;
                false
            }
            Position::At(i) => {
                self.position = Position::At(i - 1);
                true
            }
            Position::End => match self.trail.len().checked_sub(1) {
                Some(last) => {
                    self.position = Position::At(last);
                    true
                }
                None => {
                    self.position = Position::Start;
                    false
                }
            },
        }
    }

    pub fn reset(&mut self) {
        self.position = Position::Start;
    }

    // consumes the top of the frontier and queues its right subtree
    fn advance(&mut self) -> bool {
        let Some(id) = self.frontier.pop() else {
            self.position = Position::End;
            return false;
        };
        let node = self.tree.node_ref(id);
        self.push_left_spine(node.right());
        self.trail.push(id);
        self.position = Position::At(self.trail.len() - 1);
        true
    }

    fn push_left_spine(&mut self, mut node: Option<NodeRef<'a, T>>) {
        while let Some(n) = node {
            log::trace!("queueing node {}", n.id().index());
            self.frontier.push(n.id());
            node = n.left();
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            frontier: self.frontier.clone(),
            trail: self.trail.clone(),
            position: self.position,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.move_next() {
            self.current()
        } else {
            None
        }
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}
