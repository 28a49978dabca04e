//! Large and skewed trees: the walk must not depend on call-stack depth

use even_tree::*;
mod common;
use common::*;

const DEEP: usize = 200_000;

#[test]
fn long_chain_does_not_overflow() {
    let edges = chain_edges(DEEP);
    let report = count_in_edges(DEEP, &edges, &CounterConfig::default()).expect("chain is a tree");

    assert_eq!(report.sizes.get(ROOT), DEEP);
    assert_eq!(report.sizes.get(DEEP), 1);
    // Node k has size DEEP - k + 1; half of nodes 2..=DEEP are even
    assert_eq!(report.removable_edges, (DEEP - 1) / 2);
    assert_eq!(report.stats.max_depth, DEEP);
}

#[test]
fn reversed_label_chain() {
    // Root 1 -> DEEP -> DEEP-1 -> ... -> 2
    let mut edges = vec![Edge::new(DEEP, 1)];
    edges.extend((2..DEEP).map(|node| Edge::new(node, node + 1)));
    let report = count_in_edges(DEEP, &edges, &CounterConfig::default()).unwrap();

    assert_eq!(report.sizes.get(2), 1);
    assert_eq!(report.sizes.get(DEEP), DEEP - 1);
    assert_eq!(report.removable_edges, (DEEP - 1) / 2);
}

#[test]
fn wide_star() {
    let edges = star_edges(DEEP);
    let report = count_in_edges(DEEP, &edges, &CounterConfig::default()).unwrap();
    assert_eq!(report.removable_edges, 0);
    assert_eq!(report.stats.max_depth, 2);
}
