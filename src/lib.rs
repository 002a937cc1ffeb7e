//! This crate exposes a plain, unbalanced Binary Search Tree (BST) keyed on a
//! caller-chosen ordering.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The [`Tree`] here
//! makes no attempt to limit its height - inserting sorted input gives a tree of
//! height `N`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree (see [`Order`]).
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x).unwrap();
//! }
//!
//! // 5 has two children so it takes its predecessor's element.
//! tree.delete(&5);
//! assert_eq!(tree.root().map(|n| *n.data()), Some(4));
//!
//! let mut sorted = Vec::new();
//! tree.traverse(Order::InOrder, |node| sorted.push(*node.data()));
//! assert_eq!(sorted, [1, 3, 4, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod compare;
mod error;
mod node;
mod pretty;
mod traverse;
pub mod tree;

pub use compare::{Compare, Natural};
pub use error::InsertError;
pub use node::Node;
pub use pretty::Sideways;
pub use traverse::{Iter, Order, Traversal};
pub use tree::Tree;
