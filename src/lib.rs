//! This crate exposes a handful of classic abstract data types, mostly for
//! educational purposes: a singly linked list, a stack and a queue built on top
//! of it, and an (unbalanced) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! [`BinarySearchTree`] is an ordered set. Each value lives in its own node
//! with at most two children, and the whole tree keeps one ordering rule: every
//! value reachable through a node's left child compares strictly less than that
//! node's value, and every value reachable through its right child compares
//! strictly greater. Because the comparisons are strict, a value can be stored
//! at most once. Inserting something the tree already holds leaves it untouched
//! and removing something it doesn't hold is a no-op.
//!
//! A lookup follows a single path from the root, so it costs `O(height)`, the
//! number of edges on the longest root-to-leaf path. Nothing rebalances the
//! tree, which means sorted input produces a chain of height `N - 1`. None of
//! the operations recurse, so a skewed tree is slow but never exhausts the call
//! stack.
//!
//! ## Linear containers
//!
//! [`LinkedList`] is the building block. [`Stack`] pushes and pops at its head
//! and [`Queue`] appends at its tail and removes from its head. The tree's
//! traversals use a [`Stack`] to remember the nodes they still have to visit.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_search_tree;
mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;


pub use binary_search_tree::BinarySearchTree;
pub use error::Error;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
