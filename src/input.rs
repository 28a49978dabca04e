//! Input parsing
//!
//! Format: a header line `N M`, followed by `M` lines `u v` where
//! `v` is the parent of `u`. Tokens are whitespace separated; line
//! breaks only matter for error positions.

use thiserror::Error;
use tracing::debug;

use crate::tree::{Edge, NodeId};

/// Errors raised while reading the tree description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before a required value was read.
    #[error("unexpected end of input on line {line}: expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for
        expected: &'static str,
        /// Line of the last token read (1-based)
        line: usize,
    },

    /// A token was not a non-negative integer.
    #[error("invalid integer '{token}' on line {line}")]
    InvalidInteger {
        /// Offending token
        token: String,
        /// Line the token appeared on (1-based)
        line: usize,
    },
}

/// Parsed header and edge list, not yet checked for tree structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInput {
    /// Declared node count N
    pub node_count: usize,

    /// Declared edge count M
    pub edge_count: usize,

    /// Edges in input order
    pub edges: Vec<Edge>,
}

/// Whitespace tokenizer that remembers which line each token came from.
#[derive(Debug)]
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            current: None,
            last_line: 1,
        }
    }

    fn next_token(&mut self) -> Option<(&'a str, usize)> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(word) = words.next() {
                    self.last_line = *line;
                    return Some((word, *line));
                }
            }
            let (idx, line) = self.lines.next()?;
            self.current = Some((idx + 1, line.split_whitespace()));
        }
    }

    fn value(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let (token, line) = self.next_token().ok_or(ParseError::UnexpectedEof {
            expected,
            line: self.last_line,
        })?;
        token.parse::<usize>().map_err(|_| ParseError::InvalidInteger {
            token: token.to_string(),
            line,
        })
    }
}

/// Parse the textual tree description.
///
/// Node labels are not range checked here; that belongs to
/// [`RootedTree::from_edges`](crate::tree::RootedTree::from_edges).
pub fn parse_tree_input(input: &str) -> Result<TreeInput, ParseError> {
    let mut tokens = Tokens::new(input);

    let node_count = tokens.value("node count N")?;
    let edge_count = tokens.value("edge count M")?;

    // Capacity is bounded by the input size so a huge declared M can't
    // force a huge allocation.
    let mut edges = Vec::with_capacity(edge_count.min(input.len() / 4 + 1));
    for _ in 0..edge_count {
        let child: NodeId = tokens.value("child node")?;
        let parent: NodeId = tokens.value("parent node")?;
        edges.push(Edge::new(child, parent));
    }

    if let Some((_, line)) = tokens.next_token() {
        debug!(line, "ignoring trailing input after last edge");
    }

    debug!(node_count, edge_count, "parsed tree input");

    Ok(TreeInput {
        node_count,
        edge_count,
        edges,
    })
}
