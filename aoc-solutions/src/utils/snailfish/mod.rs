//! Snailfish numbers
//!
//! A snailfish number is a binary tree: every pair has exactly two elements
//! and every element is either a regular number or another pair. Numbers are
//! written as nested brackets, e.g. `[[1,2],[[3,4],5]]`.
//!
//! The tree lives in a flat arena. Each node stores the index of its parent
//! and the side of the parent it hangs from, which is what an explosion needs
//! to find the nearest regular number on either side of it.
//!
//! # Operations
//!
//! - parsing through [`FromStr`](std::str::FromStr), failing with [`MalformedInput`]
//! - addition ([`SnailNumber::add`], also available as `+`), which reduces the sum
//! - reduction ([`SnailNumber::reduce`]) built from [`SnailNumber::explode`]
//!   and [`SnailNumber::split`]
//! - [`SnailNumber::magnitude`]
//! - rendering through [`Display`](std::fmt::Display), [`render`] and
//!   [`SnailNumber::colored`]
//!
//! # Example
//!
//! ```
//! use aoc_solutions::utils::snailfish::SnailNumber;
//!
//! let a: SnailNumber = "[[[[4,3],4],4],[7,[[8,4],9]]]".parse().unwrap();
//! let b: SnailNumber = "[1,1]".parse().unwrap();
//!
//! let sum = a + b;
//! assert_eq!(sum.to_string(), "[[[[0,7],4],[[7,8],[6,0]]],[8,1]]");
//! assert_eq!(sum.magnitude(), 1384);
//! ```

mod parse;
mod reduce;
mod render;

#[cfg(test)]
mod tests;

pub use parse::MalformedInput;
pub use render::{Colored, render};

use std::ops;

/// Index of a node inside a [`SnailNumber`] arena
pub type NodeId = usize;

/// Position of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The node has no parent
    Root,
    /// First element of the parent pair
    Left,
    /// Second element of the parent pair
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Leaf(u32),
    Pair { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    side: Side,
}

/// A snailfish number stored as an arena-backed binary tree
///
/// Slots freed by explosions are recycled by later splits. Equality is
/// structural, so two numbers with different arena layouts but the same
/// shape and values compare equal.
#[derive(Debug, Clone)]
pub struct SnailNumber {
    nodes: Vec<Node>,
    root: NodeId,
    free: Vec<NodeId>,
}

impl SnailNumber {
    /// Add two numbers and reduce the result
    ///
    /// Both operands are consumed: their nodes are copied into a fresh arena
    /// under a new root, `self` on the left and `rhs` on the right.
    pub fn add(self, rhs: SnailNumber) -> SnailNumber {
        let mut sum = SnailNumber {
            nodes: Vec::with_capacity(self.len() + rhs.len() + 1),
            root: 0,
            free: Vec::new(),
        };

        let root = sum.alloc(NodeKind::Leaf(0), None, Side::Root);
        let left = sum.graft(&self, self.root, root, Side::Left);
        let right = sum.graft(&rhs, rhs.root, root, Side::Right);
        sum.nodes[root].kind = NodeKind::Pair { left, right };
        sum.root = root;

        sum.reduce();
        sum
    }

    /// Add `next` onto a running total that may not have started yet
    ///
    /// With no total the result is `next` itself, unreduced. This is the
    /// step function of a left fold over a list of numbers.
    pub fn accumulate(total: Option<SnailNumber>, next: SnailNumber) -> SnailNumber {
        match total {
            Some(total) => total.add(next),
            None => next,
        }
    }

    /// Weighted sum of the tree: three times the left element plus twice the right
    pub fn magnitude(&self) -> u64 {
        self.magnitude_of(self.root)
    }

    /// Number of live nodes (pairs and regular numbers)
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Always false: a snailfish number has at least one pair
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn magnitude_of(&self, id: NodeId) -> u64 {
        match self.nodes[id].kind {
            NodeKind::Leaf(value) => u64::from(value),
            NodeKind::Pair { left, right } => {
                3 * self.magnitude_of(left) + 2 * self.magnitude_of(right)
            }
        }
    }

    fn alloc(&mut self, kind: NodeKind, parent: Option<NodeId>, side: Side) -> NodeId {
        let node = Node { kind, parent, side };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.free.push(id);
    }

    /// Copy the subtree of `src` rooted at `id` below `parent`
    fn graft(&mut self, src: &SnailNumber, id: NodeId, parent: NodeId, side: Side) -> NodeId {
        let copy = self.alloc(NodeKind::Leaf(0), Some(parent), side);
        let kind = match src.nodes[id].kind {
            NodeKind::Leaf(value) => NodeKind::Leaf(value),
            NodeKind::Pair { left, right } => NodeKind::Pair {
                left: self.graft(src, left, copy, Side::Left),
                right: self.graft(src, right, copy, Side::Right),
            },
        };
        self.nodes[copy].kind = kind;
        copy
    }

    fn same_subtree(&self, id: NodeId, other: &SnailNumber, other_id: NodeId) -> bool {
        match (self.nodes[id].kind, other.nodes[other_id].kind) {
            (NodeKind::Leaf(a), NodeKind::Leaf(b)) => a == b,
            (
                NodeKind::Pair { left: a_left, right: a_right },
                NodeKind::Pair { left: b_left, right: b_right },
            ) => {
                self.same_subtree(a_left, other, b_left) && self.same_subtree(a_right, other, b_right)
            }
            _ => false,
        }
    }
}

impl ops::Add for SnailNumber {
    type Output = SnailNumber;

    fn add(self, rhs: SnailNumber) -> SnailNumber {
        SnailNumber::add(self, rhs)
    }
}

impl PartialEq for SnailNumber {
    fn eq(&self, other: &Self) -> bool {
        self.same_subtree(self.root, other, other.root)
    }
}

impl Eq for SnailNumber {}
