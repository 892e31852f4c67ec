//! Depth first and breadth first traversals of an [`OrderedTree`][crate::OrderedTree].
//!
//! The eager collectors recurse, so their stack depth is the height of the tree. The iterators in
//! this module keep their own stack (or queue) on the heap instead, which makes them the way to
//! visit trees that have degenerated into long chains.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.dfs_in_order(), vec![&1, &3, &4, &5, &7, &8, &9]);
//! assert!(tree.iter().eq(tree.dfs_in_order()));
//! ```

use std::collections::VecDeque;

use crate::node::Node;

pub(crate) fn collect_pre_order<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        out.push(&n.value);
        collect_pre_order(n.left(), out);
        collect_pre_order(n.right(), out);
    }
}

pub(crate) fn collect_in_order<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        collect_in_order(n.left(), out);
        out.push(&n.value);
        collect_in_order(n.right(), out);
    }
}

pub(crate) fn collect_post_order<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        collect_post_order(n.left(), out);
        collect_post_order(n.right(), out);
        out.push(&n.value);
    }
}

/// Level order using a FIFO queue seeded with the root. Children are queued left before right.
pub(crate) fn collect_level_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    LevelOrder::new(root).collect()
}

/// Lazily visits a node, then its left subtree, then its right subtree.
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

/// Lazily visits the left subtree, then the node, then the right subtree. Values come out in
/// non-decreasing order.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// Lazily visits the left subtree, then the right subtree, then the node.
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    /// Each entry is a node and whether its children have already been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

/// Lazily visits the tree one level at a time, left to right.
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}
