//! Whole-tree walks for printing. All of them keep an explicit stack instead of
//! recursing, so a degenerate (list-shaped) tree cannot exhaust the call stack.

use crate::binary_search_tree::NodeRef;
use std::iter::FusedIterator;

/// Node, then left subtree, then right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // right first so that left is popped next
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

// shared by the two symmetric walks below; `descending` swaps the roles of
// the children
struct SpineWalk<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
    descending: bool,
}

impl<'a, T> SpineWalk<'a, T> {
    fn new(root: Option<NodeRef<'a, T>>, descending: bool) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            descending,
        };
        walk.push_spine(root);
        walk
    }

    fn near(&self, node: NodeRef<'a, T>) -> Option<NodeRef<'a, T>> {
        if self.descending { node.right() } else { node.left() }
    }

    fn far(&self, node: NodeRef<'a, T>) -> Option<NodeRef<'a, T>> {
        if self.descending { node.left() } else { node.right() }
    }

    fn push_spine(&mut self, mut node: Option<NodeRef<'a, T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = self.near(n);
        }
    }

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        let far = self.far(node);
        self.push_spine(far);
        Some(node.value())
    }
}

/// Left subtree, node, right subtree: ascending order.
pub struct InOrder<'a, T>(SpineWalk<'a, T>);

impl<'a, T> InOrder<'a, T> {
    pub fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self(SpineWalk::new(root, false))
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Right subtree, node, left subtree: descending order.
pub struct ReverseOrder<'a, T>(SpineWalk<'a, T>);

impl<'a, T> ReverseOrder<'a, T> {
    pub fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self(SpineWalk::new(root, true))
    }
}

impl<'a, T> Iterator for ReverseOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }
}

impl<T> FusedIterator for ReverseOrder<'_, T> {}
