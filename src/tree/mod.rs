//! Rooted tree built from child/parent edges
//!
//! Nodes are labeled 1..=N, slot 0 is an unused sentinel.
//! Children are kept in input order per parent.

mod traversal;

pub use traversal::{PostOrderTraversal, TraversalStats};

use std::fmt;

use bitvec::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Validation;

/// Node label (1-based)
pub type NodeId = usize;

/// The root is always node 1.
pub const ROOT: NodeId = 1;

/// A single input edge: `parent` is the parent of `child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Node listed first on the input line
    pub child: NodeId,

    /// Node listed second on the input line
    pub parent: NodeId,
}

impl Edge {
    /// Create edge `child -> parent`
    pub fn new(child: NodeId, parent: NodeId) -> Self {
        Self { child, parent }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.child, self.parent)
    }
}

/// Structural problems with the edge set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// N = 0 leaves no root.
    #[error("tree must contain at least the root node")]
    EmptyTree,

    /// N is larger than the edges could ever mention.
    #[error("declared {node_count} nodes but {edge_count} edges can mention at most {limit}")]
    TooManyNodes {
        /// Declared node count
        node_count: usize,
        /// Edges supplied
        edge_count: usize,
        /// Largest N accepted for that many edges
        limit: usize,
    },

    /// An endpoint is not in 1..=N.
    #[error("node {node} is outside 1..={node_count}")]
    NodeOutOfRange {
        /// Offending label
        node: NodeId,
        /// Declared node count
        node_count: usize,
    },

    /// M != N - 1.
    #[error("expected {expected} edges for {node_count} nodes, found {found}")]
    EdgeCountMismatch {
        /// N - 1
        expected: usize,
        /// Edges supplied
        found: usize,
        /// Declared node count
        node_count: usize,
    },

    /// Edge from a node to itself.
    #[error("node {0} is its own parent")]
    SelfLoop(NodeId),

    /// The root was listed as a child.
    #[error("root node 1 cannot have a parent (edge {0})")]
    RootHasParent(Edge),

    /// A node was listed as a child twice.
    #[error("node {node} has two parents: {first} and {second}")]
    MultipleParents {
        /// Child node
        node: NodeId,
        /// Parent from the earlier edge
        first: NodeId,
        /// Parent from the later edge
        second: NodeId,
    },

    /// A node can't be reached from the root.
    #[error("node {0} is not reachable from the root")]
    Unreachable(NodeId),

    /// Traversal entered a node twice (cycle or shared child).
    #[error("node {node} was reached twice; input is not a tree")]
    NotATree {
        /// Node entered a second time
        node: NodeId,
    },
}

/// Adjacency mapping from each node to its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedTree {
    /// `children[u]` lists the children of `u`; `children[0]` stays empty
    children: Vec<Vec<NodeId>>,

    /// Number of edges inserted
    edge_count: usize,
}

impl RootedTree {
    /// Build the adjacency mapping from input edges.
    ///
    /// Range checks always run. [`Validation::Strict`] additionally
    /// requires the edges to form one tree rooted at [`ROOT`].
    pub fn from_edges(
        node_count: usize,
        edges: &[Edge],
        validation: Validation,
    ) -> Result<Self, TreeError> {
        if node_count == 0 {
            return Err(TreeError::EmptyTree);
        }

        // Strict mode bounds N through the edge count; trusting mode needs
        // its own cap so a bare header can't size the allocation.
        if validation == Validation::Trusting {
            let limit = edges.len().saturating_mul(2).saturating_add(1);
            if node_count > limit {
                return Err(TreeError::TooManyNodes {
                    node_count,
                    edge_count: edges.len(),
                    limit,
                });
            }
        }

        for edge in edges {
            for node in [edge.child, edge.parent] {
                if node == 0 || node > node_count {
                    return Err(TreeError::NodeOutOfRange { node, node_count });
                }
            }
        }

        if validation == Validation::Strict {
            check_parents(node_count, edges)?;
        }

        let mut children = vec![Vec::new(); node_count + 1];
        for edge in edges {
            children[edge.parent].push(edge.child);
        }

        let tree = Self {
            children,
            edge_count: edges.len(),
        };

        if validation == Validation::Strict {
            tree.check_reachable()?;
        }

        if node_count > 1 && node_count % 2 == 1 {
            info!(
                node_count,
                "odd node count: the component containing the root can never be even"
            );
        }

        debug!(node_count, edge_count = tree.edge_count, ?validation, "built rooted tree");
        Ok(tree)
    }

    /// Number of nodes N
    pub fn node_count(&self) -> usize {
        self.children.len() - 1
    }

    /// Number of edges inserted
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Direct children of `node` in input order
    ///
    /// Labels outside 1..=N have no children.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is a valid label
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node >= ROOT && node < self.children.len()
    }

    /// Iterative breadth-first sweep from the root.
    ///
    /// Called only after `check_parents`, so every node has at most one
    /// parent and the sweep cannot loop.
    fn check_reachable(&self) -> Result<(), TreeError> {
        let mut seen = bitvec![0; self.children.len()];
        seen.set(ROOT, true);
        let mut queue = vec![ROOT];

        while let Some(node) = queue.pop() {
            for &child in self.children(node) {
                if !seen[child] {
                    seen.set(child, true);
                    queue.push(child);
                }
            }
        }

        match seen[ROOT..].first_zero() {
            Some(offset) => Err(TreeError::Unreachable(ROOT + offset)),
            None => Ok(()),
        }
    }
}

/// Edge-count and one-parent-per-node checks.
fn check_parents(node_count: usize, edges: &[Edge]) -> Result<(), TreeError> {
    let expected = node_count - 1;
    if edges.len() != expected {
        return Err(TreeError::EdgeCountMismatch {
            expected,
            found: edges.len(),
            node_count,
        });
    }

    let mut parent_of: Vec<Option<NodeId>> = vec![None; node_count + 1];
    for &edge in edges {
        if edge.child == edge.parent {
            return Err(TreeError::SelfLoop(edge.child));
        }
        if edge.child == ROOT {
            return Err(TreeError::RootHasParent(edge));
        }
        if let Some(first) = parent_of[edge.child] {
            return Err(TreeError::MultipleParents {
                node: edge.child,
                first,
                second: edge.parent,
            });
        }
        parent_of[edge.child] = Some(edge.parent);
    }

    Ok(())
}
