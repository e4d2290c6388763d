//! An owned BST that is normally built all at once from a list of values.
//!
//! [`Tree::from_values`] sorts the values and keeps picking the middle of the remaining range as
//! the next subtree root, so the resulting tree is height balanced. [`Tree::insert`] places a
//! single value the usual way and never rebalances.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let tree = Tree::from_values(vec![7, 1, 4, 3, 6, 2, 5]);
//!
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//!
//! // Values are never stored twice.
//! let mut tree = tree;
//! assert!(!tree.insert(4));
//! assert_eq!(tree.len(), 7);
//! ```

use std::cmp;

use tracing::debug;

use crate::traversal::{self, Order};

/// A single value in a [`Tree`] along with its (optional) children. A `Node` exclusively owns
/// its children.
// TODO stack based Clone, PartialEq and Debug. The derived ones recurse once per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any. Every value in there is smaller than this node's.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every value in there is larger than this node's.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
}

/// Frees a subtree without recursing, so a long chain of single children can't overflow the
/// stack.
fn drop_link<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Builds a subtree out of sorted, distinct `values` by splitting at `floor((start + end) / 2)`.
///
/// The split point is computed relative to the slice so it is always `(len - 1) / 2`. Ownership
/// of the values moves into the nodes so nothing is cloned. Recursion depth is `O(lg N)`.
fn build<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }

    let mid = (values.len() - 1) / 2;
    let right = values.split_off(mid + 1);
    let value = values.pop()?;

    Some(Box::new(Node {
        value,
        left: build(values),
        right: build(right),
    }))
}

/// A Binary Search Tree of unique values.
///
/// Walking the tree never recurses per level, so trees made by [`Tree::insert`] from sorted
/// input (which degrade into a chain) are still safe to query and drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        drop_link(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height balanced tree out of `values`. The order of `values` doesn't matter.
    ///
    /// Values are meant to be distinct already. If they aren't, repeats are dropped so the tree
    /// still never holds a value twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![3, 1, 2]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(*root.value(), 2);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(3));
    ///
    /// assert!(Tree::<i64>::from_values(vec![]).is_empty());
    /// ```
    pub fn from_values(values: Vec<T>) -> Self
    where
        T: cmp::Ord,
    {
        let mut tree = Self::new();
        tree.fill(values);
        tree
    }

    /// Replaces everything in this tree with a balanced tree made from `values`.
    pub fn fill(&mut self, mut values: Vec<T>)
    where
        T: cmp::Ord,
    {
        let given = values.len();
        values.sort_unstable();
        values.dedup();
        if values.len() != given {
            debug!(
                dropped = given - values.len(),
                "Dropped repeated values while building"
            );
        }

        drop_link(self.root.take());
        self.root = build(values);
        debug!(height = self.height(), "Built balanced tree");
    }

    /// Inserts `value` below the node it belongs under without rebalancing. Returns whether the
    /// value was added; inserting a value that is already present leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: cmp::Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                cmp::Ordering::Less => &mut node.left,
                cmp::Ordering::Equal => return false,
                cmp::Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Box::new(Node::new(value)));
        true
    }

    /// Whether some node in this tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                cmp::Ordering::Less => node.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        drop_link(self.root.take());
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in this tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        traversal::walk(self.root(), Order::Pre, |_| count += 1);
        count
    }

    /// The number of levels in this tree. A tree with only a root has a height of 1.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }
        deepest
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        // Post-order sees both subtrees before their parent, so the heights of a node's
        // children are always the top of the stack (right above left).
        let mut heights: Vec<usize> = Vec::new();
        let mut balanced = true;
        traversal::walk(self.root(), Order::Post, |node| {
            let right = node.right().and_then(|_| heights.pop()).unwrap_or(0);
            let left = node.left().and_then(|_| heights.pop()).unwrap_or(0);
            balanced &= left.abs_diff(right) <= 1;
            heights.push(left.max(right) + 1);
        });
        balanced
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}
