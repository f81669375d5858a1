use crate::cursor::Cursor;
use crate::error::DuplicateValueError;
use crate::traversal::{InOrder, PreOrder, ReverseOrder};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Root,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Root => "root",
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

#[derive(Clone, Debug)]
struct TreeNode<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    // non-owning; None only for the root
    parent: Option<NodeId>,
}

/// Unbalanced binary search tree over distinct values.
///
/// # Example
/// ```rust
/// use binary_tree::Tree;
/// let mut tree = Tree::new();
/// for value in [8, 3, 10, 1, 6] {
///     tree.add(value).unwrap();
/// }
/// assert!(tree.add(6).is_err());
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 6, 8, 10]);
/// ```
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| self.node_ref(id))
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        (id.0 < self.nodes.len()).then(|| self.node_ref(id))
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|n| &n.value)
    }

    pub fn side(&self, id: NodeId) -> Option<Side> {
        self.node(id).map(|n| n.side())
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id.0];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Right subtree, node, left subtree: values in descending order.
    pub fn reverse_order(&self) -> ReverseOrder<'_, T> {
        ReverseOrder::new(self.root())
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_, T> {
        NodeRef { tree: self, id }
    }

    fn side_of(&self, id: NodeId) -> Side {
        match self.nodes[id.0].parent {
            None => Side::Root,
            Some(parent) if self.nodes[parent.0].left == Some(id) => Side::Left,
            Some(_) => Side::Right,
        }
    }
}

impl<T: Ord> Tree<T> {
    pub fn from_values<I>(values: I) -> Result<Self, DuplicateValueError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.add(value)?;
        }
        Ok(tree)
    }

    /// A value equal to an existing one is handed back in the error and the
    /// tree is left untouched.
    pub fn add(&mut self, value: T) -> Result<NodeId, DuplicateValueError<T>> {
        let id = NodeId(self.nodes.len());

        let Some(mut current) = self.root else {
            log::debug!("attaching node {} as root", id.0);
            self.nodes.push(TreeNode {
                value,
                left: None,
                right: None,
                parent: None,
            });
            self.root = Some(id);
            return Ok(id);
        };

        // nothing is written until the attachment point is known
        let ordering = loop {
            let node = &self.nodes[current.0];
            let ordering = value.cmp(&node.value);
            let child = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    log::debug!("rejecting duplicate of node {}", current.0);
                    return Err(DuplicateValueError::new(value));
                }
            };
            match child {
                Some(child) => {
                    log::trace!("descending {:?} from node {}", ordering, current.0);
                    current = child;
                }
                None => break ordering,
            }
        };

        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
            parent: Some(current),
        });
        let parent = &mut self.nodes[current.0];
        if ordering == Ordering::Less {
            parent.left = Some(id);
        } else {
            parent.right = Some(id);
        }
        log::debug!("attaching node {} under node {} ({:?})", id.0, current.0, ordering);
        Ok(id)
    }

    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T: fmt::Display> Tree<T> {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(NodeRef<'_, T>, String, bool)> =
            self.root().map(|root| (root, String::new(), true)).into_iter().collect();

        while let Some((node, prefix, is_tail)) = stack.pop() {
            out.push_str(&format!(
                "{}{} {} ({})\n",
                prefix,
                if is_tail { "└──" } else { "├──" },
                node.value(),
                node.side()
            ));

            let child_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });
            // right is drawn first and only a left child closes the branch
            if let Some(left) = node.left() {
                stack.push((left, child_prefix.clone(), true));
            }
            if let Some(right) = node.right() {
                stack.push((right, child_prefix, false));
            }
        }
        out
    }

    pub fn pretty_print(&self) {
        println!("\n=== Binary Search Tree ===");
        if self.is_empty() {
            println!("  (empty tree)");
        } else {
            print!("{}", self.render());
        }
        println!("=========================\n");
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Cursor<'a, T> {
        self.cursor()
    }
}

pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("side", &self.side())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.raw().value
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.raw().left.map(|id| self.tree.node_ref(id))
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.raw().right.map(|id| self.tree.node_ref(id))
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.raw().parent.map(|id| self.tree.node_ref(id))
    }

    pub fn side(&self) -> Side {
        self.tree.side_of(self.id)
    }

    pub fn is_leaf(&self) -> bool {
        let node = self.raw();
        node.left.is_none() && node.right.is_none()
    }

    fn raw(&self) -> &'a TreeNode<T> {
        &self.tree.nodes[self.id.0]
    }
}
