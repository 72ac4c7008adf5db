//! Text rendering, plain and colour-coded

use super::{NodeId, NodeKind, Side, SnailNumber};
use std::fmt;

const RESET: &str = "\x1b[0m";

/// Render an optional number, using `[]` when there is none
pub fn render(number: Option<&SnailNumber>) -> String {
    match number {
        Some(number) => number.to_string(),
        None => "[]".to_string(),
    }
}

impl fmt::Display for SnailNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root, false)
    }
}

/// Display adapter that colours every token by the side of its node
///
/// Brackets and commas take the colour of the pair they belong to, regular
/// numbers the colour of their own node: red for the root, magenta for left
/// elements and cyan for right elements.
pub struct Colored<'a>(&'a SnailNumber);

impl fmt::Display for Colored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_node(f, self.0.root, true)
    }
}

impl SnailNumber {
    /// Colour-coded rendering for terminal diagnostics
    pub fn colored(&self) -> Colored<'_> {
        Colored(self)
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, colored: bool) -> fmt::Result {
        let node = &self.nodes[id];
        match node.kind {
            NodeKind::Leaf(value) => write_token(f, node.side, colored, value),
            NodeKind::Pair { left, right } => {
                write_token(f, node.side, colored, '[')?;
                self.write_node(f, left, colored)?;
                write_token(f, node.side, colored, ',')?;
                self.write_node(f, right, colored)?;
                write_token(f, node.side, colored, ']')
            }
        }
    }
}

fn write_token(
    f: &mut fmt::Formatter<'_>,
    side: Side,
    colored: bool,
    token: impl fmt::Display,
) -> fmt::Result {
    if colored {
        write!(f, "{}{}{}", side_colour(side), token, RESET)
    } else {
        write!(f, "{}", token)
    }
}

fn side_colour(side: Side) -> &'static str {
    match side {
        Side::Root => "\x1b[1;31m",
        Side::Left => "\x1b[1;35m",
        Side::Right => "\x1b[1;36m",
    }
}
