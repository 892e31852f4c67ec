//! An ordered, unbalanced Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has up to two child `Node`s. The invariant this crate maintains is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Equal values always go right, so inserting the same value twice
//! > is allowed and both copies are kept.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). [`OrderedTree`] does
//! no rebalancing, so inserting values in sorted order yields a tree whose
//! height is the number of values. The recursive operations recurse once per
//! level; [`OrderedTree::insert`], [`OrderedTree::find`] and the iterators in
//! [`traversal`] don't.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.bfs(), vec![&5, &3, &8, &1, &4, &7, &9]);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.find_second_highest(), Some(&8));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod traversal;
mod tree;

pub use node::Node;
pub use tree::OrderedTree;
