//! This crate builds balanced Binary Search Trees (BSTs) from a list of numbers and walks them,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure made of `Node`s. A `Node` stores a value and may
//! have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest path from the root
//! `Node` to a leaf `Node`). If all the values are known up front, the height can be kept at
//! `O(lg N)` by sorting them and always making the middle value of a range the root of that
//! range's subtree. That is what [`tree::Tree::from_values`] does.
//!
//! ## Traversals
//!
//! A traversal visits every `Node` once. The three depth first orders differ only in when a
//! `Node` is emitted relative to its subtrees (see [`traversal::Order`]). Visiting the left
//! subtree, then the subtree root, then the right subtree (in-order) yields the values sorted.
//!
//! ## The rest
//!
//! [`input`] turns typed text into values, [`layout`] arranges a tree for display,
//! [`animator`] plays a traversal one value at a time, [`handoff`] passes values between
//! invocations and [`config`] holds the CLI's settings.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod animator;
pub mod config;
pub mod handoff;
pub mod input;
pub mod layout;
pub mod traversal;
pub mod tree;
