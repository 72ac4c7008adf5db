//! Explode and split rewrites

use super::{NodeId, NodeKind, Side, SnailNumber};
use tracing::trace;

/// Pairs nested inside this many pairs explode
const EXPLODE_DEPTH: usize = 4;
/// Regular numbers at or above this value split
const SPLIT_THRESHOLD: u32 = 10;

/// A pair chosen for explosion, with both of its regular numbers
struct Explosion {
    pair: NodeId,
    left: (NodeId, u32),
    right: (NodeId, u32),
}

impl SnailNumber {
    /// Apply explode and split until neither applies
    ///
    /// Explosions always take priority over splits, and the search restarts
    /// from the root after every single rewrite.
    pub fn reduce(&mut self) {
        let (mut explosions, mut splits) = (0u32, 0u32);
        loop {
            if self.explode() {
                explosions += 1;
                trace!(step = "explode", number = %self);
                continue;
            }
            if self.split() {
                splits += 1;
                trace!(step = "split", number = %self);
                continue;
            }
            break;
        }
        trace!(explosions, splits, "reduced");
    }

    /// Explode the leftmost pair nested inside four or more pairs
    ///
    /// Only pairs made of two regular numbers are candidates. The left value
    /// is added to the nearest regular number to the left of the pair and the
    /// right value to the nearest one to the right; a missing neighbour is
    /// skipped. The pair is then replaced by the regular number 0.
    ///
    /// Returns `false` if no pair qualifies.
    pub fn explode(&mut self) -> bool {
        let Some(Explosion { pair, left, right }) = self.find_explosion(self.root, 0) else {
            return false;
        };

        if let Some(target) = self.neighbour(pair, Side::Left) {
            self.add_to_leaf(target, left.1);
        }
        if let Some(target) = self.neighbour(pair, Side::Right) {
            self.add_to_leaf(target, right.1);
        }

        self.nodes[pair].kind = NodeKind::Leaf(0);
        self.release(left.0);
        self.release(right.0);
        true
    }

    /// Split the leftmost regular number that is 10 or greater
    ///
    /// The number becomes a pair of its halves, rounded down on the left and
    /// up on the right. Returns `false` if no number qualifies.
    pub fn split(&mut self) -> bool {
        let Some((id, value)) = self.find_split(self.root) else {
            return false;
        };

        let left = self.alloc(NodeKind::Leaf(value / 2), Some(id), Side::Left);
        let right = self.alloc(NodeKind::Leaf(value - value / 2), Some(id), Side::Right);
        self.nodes[id].kind = NodeKind::Pair { left, right };
        true
    }

    /// Whether neither explode nor split can apply
    pub fn is_reduced(&self) -> bool {
        self.is_stable(self.root, 0)
    }

    fn is_stable(&self, id: NodeId, depth: usize) -> bool {
        match self.nodes[id].kind {
            NodeKind::Leaf(value) => value < SPLIT_THRESHOLD,
            NodeKind::Pair { left, right } => {
                depth < EXPLODE_DEPTH
                    && self.is_stable(left, depth + 1)
                    && self.is_stable(right, depth + 1)
            }
        }
    }

    /// Pre-order search for the first pair that can explode
    fn find_explosion(&self, id: NodeId, depth: usize) -> Option<Explosion> {
        let NodeKind::Pair { left, right } = self.nodes[id].kind else {
            return None;
        };

        if depth >= EXPLODE_DEPTH
            && let (NodeKind::Leaf(left_value), NodeKind::Leaf(right_value)) =
                (self.nodes[left].kind, self.nodes[right].kind)
        {
            return Some(Explosion {
                pair: id,
                left: (left, left_value),
                right: (right, right_value),
            });
        }

        self.find_explosion(left, depth + 1)
            .or_else(|| self.find_explosion(right, depth + 1))
    }

    /// Pre-order search for the first regular number that can split
    fn find_split(&self, id: NodeId) -> Option<(NodeId, u32)> {
        match self.nodes[id].kind {
            NodeKind::Leaf(value) if value >= SPLIT_THRESHOLD => Some((id, value)),
            NodeKind::Leaf(_) => None,
            NodeKind::Pair { left, right } => {
                self.find_split(left).or_else(|| self.find_split(right))
            }
        }
    }

    /// Nearest regular number on the given side of `id`
    ///
    /// Climbs while the current node sits on `direction` of its parent, steps
    /// across to the sibling subtree, then descends towards `id` (rightmost for
    /// a left neighbour, leftmost for a right neighbour).
    fn neighbour(&self, id: NodeId, direction: Side) -> Option<NodeId> {
        let mut current = id;
        while self.nodes[current].side == direction {
            current = self.nodes[current].parent?;
        }

        // Reaching the root means nothing lies on that side
        let parent = self.nodes[current].parent?;
        let NodeKind::Pair { left, right } = self.nodes[parent].kind else {
            return None;
        };

        let mut current = if direction == Side::Left { left } else { right };
        while let NodeKind::Pair { left, right } = self.nodes[current].kind {
            current = if direction == Side::Left { right } else { left };
        }
        Some(current)
    }

    fn add_to_leaf(&mut self, id: NodeId, amount: u32) {
        if let NodeKind::Leaf(value) = &mut self.nodes[id].kind {
            *value = value.saturating_add(amount);
        }
    }
}
