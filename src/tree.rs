//! An unbalanced, mutable BST that owns its nodes outright. Values equal to a node are always
//! placed in that node's right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(5).insert(3).insert_recursively(8);
//! assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
//!
//! // Removing a value unlinks its node.
//! tree.remove(&3);
//! assert!(tree.find(&3).is_none());
//! assert_eq!(tree.dfs_in_order(), vec![&5, &8]);
//! ```

use std::fmt;

use log::trace;

use crate::node::{Link, Node};
use crate::traversal::{self, InOrder, LevelOrder, PostOrder, PreOrder};

/// A Binary Search Tree without any balancing. This can be used for inserting, finding, and
/// removing values, traversing them in several orders, and asking a couple of questions about
/// the tree's shape.
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // Dropping boxed nodes recurses once per level, which overflows on tall trees. Detach every
    // child before its parent is dropped instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root())
            .finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a tree whose root is the given, already built, node. See
    /// [`Node::with_children`].
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree by walking down from the root with a cursor until an empty
    /// slot is found. Values less than a node go left, everything else goes right, so duplicates
    /// end up in the right subtree of the value they duplicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2).insert(1).insert(2);
    ///
    /// // The second 2 is the root's right child.
    /// assert_eq!(tree.dfs_pre_order(), vec![&2, &1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        if self.root.is_none() {
            trace!("inserting root node");
        }

        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cursor = Some(Box::new(Node::new(value)));

        self
    }

    /// Inserts `value` into the tree by recursively rebuilding the path from the root to the
    /// insertion point. This places `value` exactly where [`insert`][Self::insert] would but
    /// recurses once per level of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut iterative = OrderedTree::new();
    /// let mut recursive = OrderedTree::new();
    /// for x in [5, 3, 8, 3] {
    ///     iterative.insert(x);
    ///     recursive.insert_recursively(x);
    /// }
    ///
    /// assert_eq!(iterative.dfs_pre_order(), recursive.dfs_pre_order());
    /// ```
    pub fn insert_recursively(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        self.root = Node::insert(self.root.take(), value);
        self
    }

    /// Potentially finds the node holding `value`. The search stops at the first match on the
    /// path from the root so, if `value` was inserted several times, this is the shallowest of
    /// those nodes. If no node holds `value`, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            if *value == node.value {
                return Some(node);
            }
            current = if *value < node.value {
                node.left()
            } else {
                node.right()
            };
        }
        None
    }

    /// The recursive equivalent of [`find`][Self::find]. Returns the same node for every input.
    pub fn find_recursively(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.find(value))
    }

    /// Removes the shallowest node holding `value`. A node with two children takes the value of
    /// its in-order successor, whose own node is unlinked instead. If no node holds `value` the
    /// tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// tree.remove(&8);
    ///
    /// // 9 moved up into 8's place.
    /// assert_eq!(tree.dfs_pre_order(), vec![&5, &3, &1, &4, &9, &7]);
    /// ```
    pub fn remove(&mut self, value: &T) -> &mut Self
    where
        T: Ord,
    {
        self.root = Node::remove(self.root.take(), value);
        self
    }

    /// Whether, at every node, the heights of the left and right subtrees differ by at most one.
    /// The empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let chain: OrderedTree<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// assert!(!chain.is_balanced());
    ///
    /// let full: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert!(full.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Node::is_balanced(self.root())
    }

    /// Finds the second highest value by following the rightmost spine. If the rightmost node has
    /// a left subtree, that subtree's largest value is the answer. Otherwise it is the rightmost
    /// node's parent. Trees with fewer than two nodes have no second highest value.
    ///
    /// Only the spine and the rightmost node's left subtree are looked at, so a copy of the
    /// largest value held anywhere else is not taken into account.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&8));
    ///
    /// let lonely: OrderedTree<_> = [5].into_iter().collect();
    /// assert_eq!(lonely.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let root = self.root()?;
        if root.is_leaf() {
            return None;
        }

        let mut parent = None;
        let mut current = root;
        while let Some(right) = current.right() {
            parent = Some(current);
            current = right;
        }

        match current.left() {
            Some(left) => Some(&left.max().value),
            None => parent.map(|p| &p.value),
        }
    }

    /// Values in pre-order: each node before its left subtree, then its right subtree.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        traversal::collect_pre_order(self.root(), &mut out);
        out
    }

    /// Values in in-order: left subtree, node, right subtree. This is always non-decreasing.
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        traversal::collect_in_order(self.root(), &mut out);
        out
    }

    /// Values in post-order: left subtree, right subtree, then the node.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        traversal::collect_post_order(self.root(), &mut out);
        out
    }

    /// Values level by level from the root, left to right within a level.
    pub fn bfs(&self) -> Vec<&T> {
        traversal::collect_level_order(self.root())
    }

    /// A lazy in-order iterator. Unlike [`dfs_in_order`][Self::dfs_in_order] this doesn't
    /// recurse.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// A lazy pre-order iterator.
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// A lazy post-order iterator.
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// A lazy level-order iterator.
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
