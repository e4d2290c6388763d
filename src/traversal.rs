//! Depth first traversals over a [`Tree`].
//!
//! Every traversal returns a freshly allocated `Vec`, so calling one repeatedly on the same tree
//! always gives the same answer.
//!
//! # Examples
//!
//! ```
//! use bst::traversal::{self, Order};
//! use bst::tree::Tree;
//!
//! let tree = Tree::from_values(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! assert_eq!(traversal::pre_order(&tree), [4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(traversal::in_order(&tree), [1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(traversal::post_order(&tree), [1, 3, 2, 5, 7, 6, 4]);
//!
//! let walk = Order::Post.traverse(&tree);
//! assert_eq!(walk.label(), "Post-order");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::{Node, Tree};

/// The order a traversal visits a node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Yields sorted values.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl Order {
    /// All orders, in the order they're usually presented.
    pub const ALL: [Order; 3] = [Order::Pre, Order::In, Order::Post];

    /// The human readable name of this order, e.g. `"Pre-order"`.
    pub fn label(self) -> &'static str {
        match self {
            Order::Pre => "Pre-order",
            Order::In => "In-order",
            Order::Post => "Post-order",
        }
    }

    /// Collects the values of `tree` in this order.
    pub fn values<T: Clone>(self, tree: &Tree<T>) -> Vec<T> {
        let mut out = Vec::new();
        walk(tree.root(), self, |node| out.push(node.value().clone()));
        out
    }

    /// Like [`Order::values`] but keeps the order alongside the values.
    pub fn traverse<T: Clone>(self, tree: &Tree<T>) -> Traversal<T> {
        Traversal {
            order: self,
            values: self.values(tree),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string doesn't name an [`Order`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown traversal order `{0}` (expected pre, in or post)")]
pub struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Order::Pre),
            "in" | "inorder" | "in-order" => Ok(Order::In),
            "post" | "postorder" | "post-order" => Ok(Order::Post),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

/// The values of a tree in some [`Order`]. This is what gets handed to an
/// [`Animator`][crate::animator::Animator].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal<T> {
    order: Order,
    values: Vec<T>,
}

impl<T> Traversal<T> {
    /// Wraps an already computed sequence of values.
    pub fn new(order: Order, values: Vec<T>) -> Self {
        Self { order, values }
    }

    /// The order these values were visited in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Shorthand for `self.order().label()`.
    pub fn label(&self) -> &'static str {
        self.order.label()
    }

    /// The visited values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the traversal, returning its values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

enum Step<'a, T> {
    /// Expand this subtree into its parts.
    Visit(&'a Node<T>),
    /// Hand this node to the caller.
    Emit(&'a Node<T>),
}

/// Calls `emit` with every node below `root` in `order`.
///
/// Uses an explicit stack instead of recursion so a tree that has degraded into a chain can be
/// walked no matter how deep it is. Parts of a subtree are pushed in reverse so they pop off in
/// `order`.
pub(crate) fn walk<'a, T>(
    root: Option<&'a Node<T>>,
    order: Order,
    mut emit: impl FnMut(&'a Node<T>),
) {
    let mut stack: Vec<Step<'a, T>> = root.map(Step::Visit).into_iter().collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Emit(node) => {
                emit(node);
                continue;
            }
            Step::Visit(node) => node,
        };

        let left = node.left().map(Step::Visit);
        let right = node.right().map(Step::Visit);
        match order {
            Order::Pre => {
                stack.extend(right);
                stack.extend(left);
                stack.push(Step::Emit(node));
            }
            Order::In => {
                stack.extend(right);
                stack.push(Step::Emit(node));
                stack.extend(left);
            }
            Order::Post => {
                stack.push(Step::Emit(node));
                stack.extend(right);
                stack.extend(left);
            }
        }
    }
}

/// The values of `tree` with each node before its subtrees.
pub fn pre_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    Order::Pre.values(tree)
}

/// The values of `tree` with each node between its subtrees. For a BST this is sorted.
pub fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    Order::In.values(tree)
}

/// The values of `tree` with each node after its subtrees.
pub fn post_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    Order::Post.values(tree)
}
