//! Positions a [`Tree`]'s nodes for display: rows of nodes grouped by depth plus the connectors
//! between each parent and its children.
//!
//! [`Layout`] is plain data. [`diagram`] turns a tree into a [`termtree::Tree`] that prints
//! nicely in a terminal, optionally highlighting one value.

use std::collections::VecDeque;
use std::fmt;

use colored::{Color, Colorize};

use crate::tree::{Node, Tree};

/// Which child of its parent a node is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The smaller child.
    Left,
    /// The larger child.
    Right,
}

/// A line to draw from `parent` to `child`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<T> {
    /// Value of the upper node.
    pub parent: T,
    /// Value of the lower node.
    pub child: T,
    /// Which side of `parent` the child hangs from.
    pub side: Side,
}

/// Nodes grouped into rows by depth, and the edges between them. Both are in breadth first order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout<T> {
    /// `levels[d]` holds the values at depth `d`, left to right.
    pub levels: Vec<Vec<T>>,
    /// One entry per parent/child pair.
    pub edges: Vec<Edge<T>>,
}

impl<T: Clone> Layout<T> {
    /// Walks `tree` level by level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::layout::Layout;
    /// use bst::tree::Tree;
    ///
    /// let layout = Layout::of(&Tree::from_values(vec![1, 2, 3]));
    ///
    /// assert_eq!(layout.levels, vec![vec![2], vec![1, 3]]);
    /// assert_eq!(layout.edges.len(), 2);
    /// ```
    pub fn of(tree: &Tree<T>) -> Self {
        let mut levels: Vec<Vec<T>> = Vec::new();
        let mut edges = Vec::new();

        let mut queue: VecDeque<(&Node<T>, usize)> =
            tree.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.value().clone());

            let children = [(node.left(), Side::Left), (node.right(), Side::Right)];
            for (child, side) in children {
                let Some(child) = child else {
                    continue;
                };
                edges.push(Edge {
                    parent: node.value().clone(),
                    child: child.value().clone(),
                    side,
                });
                queue.push_back((child, depth + 1));
            }
        }

        Self { levels, edges }
    }
}

impl<T> Layout<T> {
    /// How many rows there are. Matches [`Tree::height`].
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

impl<T: fmt::Display> fmt::Display for Layout<T> {
    /// One row per level, values separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, level) in self.levels.iter().enumerate() {
            write!(f, "{depth}:")?;
            for value in level {
                write!(f, " {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// How a [`diagram`] draws node labels.
#[derive(Clone, Debug)]
pub struct Style<'a, T> {
    /// This value (if present in the tree) is drawn in `color`.
    pub highlight: Option<&'a T>,
    /// Color of the highlighted label.
    pub color: Color,
}

impl<T> Default for Style<'_, T> {
    fn default() -> Self {
        Self {
            highlight: None,
            color: Color::Yellow,
        }
    }
}

/// Builds a printable diagram of `tree`. Children are prefixed with `L` or `R` since a node with
/// a single child would otherwise be ambiguous.
pub fn diagram<T>(tree: &Tree<T>, style: &Style<'_, T>) -> termtree::Tree<String>
where
    T: fmt::Display + PartialEq,
{
    match tree.root() {
        Some(root) => node_diagram(root, None, style),
        None => termtree::Tree::new("(empty tree)".to_string()),
    }
}

fn node_diagram<T>(
    node: &Node<T>,
    side: Option<Side>,
    style: &Style<'_, T>,
) -> termtree::Tree<String>
where
    T: fmt::Display + PartialEq,
{
    let text = match side {
        None => node.value().to_string(),
        Some(Side::Left) => format!("L {}", node.value()),
        Some(Side::Right) => format!("R {}", node.value()),
    };
    let label = if style.highlight == Some(node.value()) {
        text.as_str().color(style.color).bold().to_string()
    } else {
        text
    };

    let leaves = [(node.left(), Side::Left), (node.right(), Side::Right)]
        .into_iter()
        .filter_map(|(child, side)| child.map(|c| node_diagram(c, Some(side), style)));

    termtree::Tree::new(label).with_leaves(leaves)
}
