//! Subtree sizes and the even-edge count
//!
//! Cutting the edge above node `v` detaches exactly `size[v]` nodes, so
//! the edge is removable iff `size[v]` is even. The answer is the number
//! of non-root nodes with an even subtree size.

use tracing::debug;

use crate::tree::{NodeId, PostOrderTraversal, RootedTree, TraversalStats, TreeError, ROOT};

/// Subtree sizes indexed by node label; slot 0 and unreached nodes hold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubtreeSizes {
    sizes: Vec<usize>,
}

impl SubtreeSizes {
    fn zeroed(node_count: usize) -> Self {
        Self {
            sizes: vec![0; node_count + 1],
        }
    }

    /// Size of the subtree rooted at `node` (0 if never computed)
    pub fn get(&self, node: NodeId) -> usize {
        self.sizes.get(node).copied().unwrap_or(0)
    }

    /// Raw slice, including the sentinel slot 0
    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of real nodes
    pub fn node_count(&self) -> usize {
        self.sizes.len().saturating_sub(1)
    }
}

/// Computes subtree sizes over a borrowed tree and counts removable edges.
#[derive(Debug)]
pub struct SubtreeCounter<'a> {
    tree: &'a RootedTree,
    sizes: SubtreeSizes,
    stats: TraversalStats,
}

impl<'a> SubtreeCounter<'a> {
    /// Counter with every size at 0
    pub fn new(tree: &'a RootedTree) -> Self {
        Self {
            tree,
            sizes: SubtreeSizes::zeroed(tree.node_count()),
            stats: TraversalStats::default(),
        }
    }

    /// Compute the size of the subtree rooted at `node`, storing it and
    /// every descendant's size.
    ///
    /// Sizes from a previous call are discarded first, so repeated calls
    /// give identical results. On error all sizes and stats are left at 0.
    pub fn compute_subtree_size(&mut self, node: NodeId) -> Result<usize, TreeError> {
        self.sizes = SubtreeSizes::zeroed(self.tree.node_count());
        self.stats = TraversalStats::default();

        let mut sizes = SubtreeSizes::zeroed(self.tree.node_count());
        let mut walk = PostOrderTraversal::new(self.tree, node)?;
        for finished in walk.by_ref() {
            let finished = finished?;
            let below: usize = self
                .tree
                .children(finished)
                .iter()
                .map(|&child| sizes.sizes[child])
                .sum();
            sizes.sizes[finished] = below + 1;
        }

        self.sizes = sizes;
        self.stats = walk.stats();
        debug!(
            node,
            size = self.sizes.sizes[node],
            nodes_visited = self.stats.nodes_visited,
            max_depth = self.stats.max_depth,
            "computed subtree sizes"
        );
        Ok(self.sizes.sizes[node])
    }

    /// Number of non-root nodes whose subtree size is even and nonzero.
    ///
    /// Meaningful after `compute_subtree_size(ROOT)`; before that every
    /// size is 0 and the count is 0.
    pub fn count_even_removable_subtrees(&self) -> usize {
        self.sizes.sizes[ROOT + 1..]
            .iter()
            .filter(|&&size| size != 0 && size % 2 == 0)
            .count()
    }

    /// Sizes from the last computation
    pub fn sizes(&self) -> &SubtreeSizes {
        &self.sizes
    }

    /// Traversal counters from the last computation
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Consume the counter, keeping the sizes
    pub fn into_sizes(self) -> SubtreeSizes {
        self.sizes
    }
}
