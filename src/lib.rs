//! # Even Tree
//!
//! Counts how many edges of a rooted tree can be removed so that every
//! resulting component has an even number of nodes.
//!
//! ## Core Algorithm
//!
//! 1. **Parse**: header `N M`, then `M` lines `u v` (v is the parent of u)
//! 2. **Build**: adjacency mapping parent → children, rooted at node 1
//! 3. **Size**: post-order walk with an explicit stack, size = 1 + Σ children
//! 4. **Count**: non-root nodes whose subtree size is even
//!
//! Result: O(N) time and O(N) auxiliary space for any tree shape.
//!
//! ## Usage Example
//!
//! ```
//! use even_tree::{count_removable_edges, CounterConfig};
//!
//! let input = "4 3\n2 1\n3 2\n4 3\n";
//! let report = count_removable_edges(input, &CounterConfig::default())?;
//! assert_eq!(report.removable_edges, 1);
//! # Ok::<(), even_tree::EvenTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;  // Validation mode
pub mod counter; // Subtree sizes and edge count
pub mod input;   // Text format parser
pub mod tree;    // Adjacency mapping and traversal

// Re-exports for convenience
pub use config::{CounterConfig, Validation};
pub use counter::{SubtreeCounter, SubtreeSizes};
pub use input::{parse_tree_input, ParseError, TreeInput};
pub use tree::{Edge, NodeId, PostOrderTraversal, RootedTree, TraversalStats, TreeError, ROOT};

use thiserror::Error;
use tracing::info;

/// Errors that can occur while counting removable edges
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvenTreeError {
    /// Input text could not be parsed
    #[error("malformed input: {0}")]
    Parse(#[from] ParseError),

    /// Edges do not describe a usable tree
    #[error("invalid tree: {0}")]
    Tree(#[from] TreeError),
}

/// Outcome of a full run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvenTreeReport {
    /// Number of removable edges
    pub removable_edges: usize,

    /// Number of nodes N
    pub node_count: usize,

    /// Size of every subtree
    pub sizes: SubtreeSizes,

    /// Traversal counters
    pub stats: TraversalStats,
}

/// Parse `input`, build the tree and count removable edges.
pub fn count_removable_edges(
    input: &str,
    config: &CounterConfig,
) -> Result<EvenTreeReport, EvenTreeError> {
    let parsed = parse_tree_input(input)?;
    count_in_edges(parsed.node_count, &parsed.edges, config)
}

/// Count removable edges for an already parsed edge list.
pub fn count_in_edges(
    node_count: usize,
    edges: &[Edge],
    config: &CounterConfig,
) -> Result<EvenTreeReport, EvenTreeError> {
    let tree = RootedTree::from_edges(node_count, edges, config.validation)?;

    let mut counter = SubtreeCounter::new(&tree);
    counter.compute_subtree_size(ROOT)?;
    let removable_edges = counter.count_even_removable_subtrees();
    let stats = counter.stats();

    info!(node_count, removable_edges, "counted removable edges");

    Ok(EvenTreeReport {
        removable_edges,
        node_count,
        sizes: counter.into_sizes(),
        stats,
    })
}
