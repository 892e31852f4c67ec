//! The building block of an [`OrderedTree`][crate::OrderedTree].
//!
//! The recursive algorithms live here as functions over a subtree [`Link`]. Each one that
//! restructures the tree takes ownership of the subtree and hands back its (possibly new) root so
//! the caller can relink it. Nodes are only ever moved between links, never shared.

use std::cmp::Ordering;

use log::{debug, trace};

/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and up to two children. Every value in the left subtree is less than
/// the node's value and every value in the right subtree is greater than or equal to it.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Constructs a new `Node` without children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Constructs a `Node` with the given children. This is meant for building a tree by hand and
    /// handing it to [`OrderedTree::with_root`][crate::OrderedTree::with_root]. Nothing checks
    /// that the children are ordered correctly relative to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, OrderedTree};
    ///
    /// let root = Node::with_children(5, Some(Node::new(3)), Some(Node::new(8)));
    /// let tree = OrderedTree::with_root(root);
    ///
    /// assert_eq!(tree.dfs_pre_order(), vec![&5, &3, &8]);
    /// ```
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the rightmost node of this subtree, which holds its largest value.
    pub(crate) fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Searches this subtree for `value`, stopping at the first node on the path that holds it.
    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Equal => Some(self),
            Ordering::Less => self.left().and_then(|n| n.find(value)),
            Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }

    /// Inserts `value` into the subtree at `link` and returns the rebuilt subtree. Values equal to
    /// a node go to its right.
    pub(crate) fn insert(link: Link<T>, value: T) -> Link<T>
    where
        T: Ord,
    {
        match link {
            None => Some(Box::new(Self::new(value))),
            Some(mut node) => {
                if value < node.value {
                    node.left = Self::insert(node.left.take(), value);
                } else {
                    node.right = Self::insert(node.right.take(), value);
                }
                Some(node)
            }
        }
    }

    /// Removes the first node holding `value` from the subtree at `link` and returns what remains.
    /// If no node holds `value` the subtree comes back unchanged.
    pub(crate) fn remove(link: Link<T>, value: &T) -> Link<T>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            debug!("value to remove not found");
            return None;
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (Some(left), None) => Some(left),
                (None, Some(right)) => Some(right),
                (Some(left), Some(right)) => {
                    // The successor is the minimum of the right subtree, so it has no left child
                    // and unlinking it is always the zero or one child case.
                    trace!("removing node with two children, promoting in-order successor");
                    let (new_right, successor) = right.take_min();
                    node.value = successor;
                    node.left = Some(left);
                    node.right = new_right;

                    if cfg!(debug_assertions) {
                        if let Some(left) = node.left() {
                            assert!(left.value < node.value);
                        }
                        if let Some(right) = node.right() {
                            assert!(right.value >= node.value);
                        }
                    }
                    Some(node)
                }
            },
        }
    }

    /// Unlinks the leftmost node of this subtree. Returns the remaining subtree and the value the
    /// unlinked node held.
    fn take_min(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            None => {
                let Node { value, right, .. } = *self;
                (right, value)
            }
            Some(left) => {
                let (new_left, min) = left.take_min();
                self.left = new_left;
                (Some(self), min)
            }
        }
    }

    /// The number of edges on the longest path from `node` down to a leaf. An empty subtree has a
    /// height of -1 so that a lone node has a height of 0.
    pub(crate) fn height(node: Option<&Self>) -> isize {
        match node {
            None => -1,
            Some(n) => Self::height(n.left()).max(Self::height(n.right())) + 1,
        }
    }

    /// Whether every node in the subtree at `node` has children whose heights differ by at most
    /// one. Heights are recomputed at every node.
    pub(crate) fn is_balanced(node: Option<&Self>) -> bool {
        match node {
            None => true,
            Some(n) => {
                (Self::height(n.left()) - Self::height(n.right())).abs() <= 1
                    && Self::is_balanced(n.left())
                    && Self::is_balanced(n.right())
            }
        }
    }
}
