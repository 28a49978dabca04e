//! Test helper functions for building tree inputs

#![allow(dead_code)]
use even_tree::{Edge, NodeId};

/// Chain 1 <- 2 <- ... <- n
pub fn chain_edges(node_count: usize) -> Vec<Edge> {
    (2..=node_count).map(|node| Edge::new(node, node - 1)).collect()
}

/// Every node hangs directly off the root
pub fn star_edges(node_count: usize) -> Vec<Edge> {
    (2..=node_count).map(|node| Edge::new(node, 1)).collect()
}

/// Render the text format read by the binary
pub fn render_input(node_count: usize, edges: &[Edge]) -> String {
    let mut text = format!("{} {}\n", node_count, edges.len());
    for edge in edges {
        text.push_str(&format!("{} {}\n", edge.child, edge.parent));
    }
    text
}

/// Straightforward recursive sizes, only for small trees
pub fn reference_sizes(node_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut children = vec![Vec::new(); node_count + 1];
    for edge in edges {
        children[edge.parent].push(edge.child);
    }

    fn fill(node: NodeId, children: &[Vec<NodeId>], sizes: &mut [usize]) -> usize {
        let size = 1 + children[node]
            .iter()
            .map(|&child| fill(child, children, sizes))
            .sum::<usize>();
        sizes[node] = size;
        size
    }

    let mut sizes = vec![0; node_count + 1];
    fill(1, &children, &mut sizes);
    sizes
}
