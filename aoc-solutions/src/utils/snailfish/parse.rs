//! Parsing of the bracketed notation

use super::{Node, NodeId, NodeKind, Side, SnailNumber};
use std::str::FromStr;
use thiserror::Error;

/// The text is not a well-formed snailfish number
///
/// `column` is the 1-based byte offset of the offending position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed snailfish number at column {column}: expected {expected}, found {}", describe(.found))]
pub struct MalformedInput {
    /// 1-based byte offset into the input
    pub column: usize,
    /// What the grammar allows at this position
    pub expected: &'static str,
    /// The character found instead, `None` at end of input
    pub found: Option<char>,
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

impl FromStr for SnailNumber {
    type Err = MalformedInput;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            text,
            pos: 0,
            nodes: Vec::with_capacity(text.len() / 2 + 1),
        };

        // A bare regular number is not a snailfish number
        if parser.peek() != Some(b'[') {
            return Err(parser.error("'['"));
        }
        let root = parser.element(None, Side::Root)?;
        if parser.pos != text.len() {
            return Err(parser.error("end of input"));
        }

        Ok(SnailNumber {
            nodes: parser.nodes,
            root,
            free: Vec::new(),
        })
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    nodes: Vec<Node>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn error(&self, expected: &'static str) -> MalformedInput {
        MalformedInput {
            column: self.pos + 1,
            expected,
            found: self.text[self.pos..].chars().next(),
        }
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), MalformedInput> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>, side: Side) -> NodeId {
        self.nodes.push(Node { kind, parent, side });
        self.nodes.len() - 1
    }

    fn element(&mut self, parent: Option<NodeId>, side: Side) -> Result<NodeId, MalformedInput> {
        match self.peek() {
            Some(b'[') => {
                self.pos += 1;
                // Children need the pair's index before the pair is complete
                let id = self.push(NodeKind::Leaf(0), parent, side);
                let left = self.element(Some(id), Side::Left)?;
                self.expect(b',', "','")?;
                let right = self.element(Some(id), Side::Right)?;
                self.expect(b']', "']'")?;
                self.nodes[id].kind = NodeKind::Pair { left, right };
                Ok(id)
            }
            Some(b'0'..=b'9') => {
                let value = self.regular()?;
                Ok(self.push(NodeKind::Leaf(value), parent, side))
            }
            _ => Err(self.error("'[' or a digit")),
        }
    }

    fn regular(&mut self) -> Result<u32, MalformedInput> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(digit @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(digit - b'0')))
                .ok_or_else(|| MalformedInput {
                    column: start + 1,
                    expected: "a regular number below 2^32",
                    found: self.text[start..].chars().next(),
                })?;
            self.pos += 1;
        }
        Ok(value)
    }
}
