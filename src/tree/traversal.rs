//! Explicit-stack post-order traversal
//!
//! One frame per active level: the node and the index of the next
//! child to descend into. Stack depth is bounded by tree height, so a
//! skewed tree of N nodes costs O(N) heap, never call-stack frames.

use bitvec::prelude::*;

use super::{NodeId, RootedTree, TreeError};

/// Stack frame for one active level
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Node whose children are being visited
    node: NodeId,

    /// Position of the next child in `children(node)`
    next_child: usize,
}

/// Counters gathered while walking the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalStats {
    /// Nodes entered
    pub nodes_visited: usize,

    /// Largest stack depth reached
    pub max_depth: usize,
}

/// Post-order walk: yields every node after all of its children.
///
/// Entering a node twice means the edges are not a tree; the walk then
/// yields a single [`TreeError::NotATree`] and stops, so malformed input
/// can't make it loop.
#[derive(Debug)]
pub struct PostOrderTraversal<'a> {
    tree: &'a RootedTree,
    stack: Vec<Frame>,
    entered: BitVec,
    stats: TraversalStats,
}

impl<'a> PostOrderTraversal<'a> {
    /// Start a walk of the subtree rooted at `start`
    pub fn new(tree: &'a RootedTree, start: NodeId) -> Result<Self, TreeError> {
        if !tree.contains(start) {
            return Err(TreeError::NodeOutOfRange {
                node: start,
                node_count: tree.node_count(),
            });
        }

        let mut traversal = Self {
            tree,
            stack: Vec::new(),
            entered: bitvec![0; tree.node_count() + 1],
            stats: TraversalStats::default(),
        };
        traversal.push_level(start);
        Ok(traversal)
    }

    /// Push a frame for `node` and mark it entered
    fn push_level(&mut self, node: NodeId) {
        self.entered.set(node, true);
        self.stack.push(Frame {
            node,
            next_child: 0,
        });
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.stack.len());
    }

    /// Current number of active levels
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Counters so far
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }
}

impl Iterator for PostOrderTraversal<'_> {
    type Item = Result<NodeId, TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let frame = self.stack.last_mut()?;
            match tree.children(frame.node).get(frame.next_child) {
                Some(&child) => {
                    frame.next_child += 1;
                    if self.entered[child] {
                        self.stack.clear();
                        return Some(Err(TreeError::NotATree { node: child }));
                    }
                    self.push_level(child);
                }
                None => {
                    let node = frame.node;
                    self.stack.pop();
                    return Some(Ok(node));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validation;
    use crate::tree::Edge;

    fn tree(node_count: usize, pairs: &[(NodeId, NodeId)], validation: Validation) -> RootedTree {
        let edges: Vec<Edge> = pairs.iter().map(|&(c, p)| Edge::new(c, p)).collect();
        RootedTree::from_edges(node_count, &edges, validation).unwrap()
    }

    #[test]
    fn test_children_before_parents() {
        // 1 -> {2, 3}, 3 -> {4}
        let tree = tree(4, &[(2, 1), (3, 1), (4, 3)], Validation::Strict);
        let order: Vec<NodeId> = PostOrderTraversal::new(&tree, 1)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_subtree_walk() {
        let tree = tree(4, &[(2, 1), (3, 1), (4, 3)], Validation::Strict);
        let order: Vec<NodeId> = PostOrderTraversal::new(&tree, 3)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(order, vec![4, 3]);
    }

    #[test]
    fn test_stats_on_chain() {
        let tree = tree(5, &[(2, 1), (3, 2), (4, 3), (5, 4)], Validation::Strict);
        let mut walk = PostOrderTraversal::new(&tree, 1).unwrap();
        assert_eq!(walk.depth(), 1);

        let first = walk.next().unwrap().unwrap();
        assert_eq!(first, 5);
        assert_eq!(walk.by_ref().count(), 4);
        assert_eq!(walk.depth(), 0);
        assert_eq!(
            walk.stats(),
            TraversalStats {
                nodes_visited: 5,
                max_depth: 5
            }
        );
    }

    #[test]
    fn test_start_out_of_range() {
        let tree = tree(2, &[(2, 1)], Validation::Strict);
        assert_eq!(
            PostOrderTraversal::new(&tree, 3).unwrap_err(),
            TreeError::NodeOutOfRange {
                node: 3,
                node_count: 2
            }
        );
        assert!(PostOrderTraversal::new(&tree, 0).is_err());
    }

    #[test]
    fn test_cycle_stops_walk() {
        // 1 -> 2 -> 3 -> 2
        let tree = tree(3, &[(2, 1), (3, 2), (2, 3)], Validation::Trusting);
        let mut walk = PostOrderTraversal::new(&tree, 1).unwrap();
        assert_eq!(walk.next(), Some(Err(TreeError::NotATree { node: 2 })));
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_shared_child_detected() {
        // 3 listed under both 1 and 2
        let tree = tree(3, &[(2, 1), (3, 1), (3, 2)], Validation::Trusting);
        let results: Vec<_> = PostOrderTraversal::new(&tree, 1).unwrap().collect();
        assert!(results.contains(&Err(TreeError::NotATree { node: 3 })));
    }
}
