//! Structural checks every graph produced by this crate must pass.
//!
//! Used by the unit tests of the builder, the builders, and the parser.

use crate::graph::WeightedGraph;
use asep_core::Universe;
use indexmap::IndexSet;

/// Every edge weight is finite and non-negative.
pub fn assert_weights_valid(g: &WeightedGraph) {
    for node in g.nodes() {
        for edge in g.out_edges(node) {
            assert!(
                edge.weight.is_finite() && edge.weight >= 0.0,
                "edge {node} -> {} has weight {}",
                edge.target,
                edge.weight
            );
        }
    }
}

/// Every edge points at a node of the same graph.
pub fn assert_targets_in_range(g: &WeightedGraph) {
    for node in g.nodes() {
        for edge in g.out_edges(node) {
            assert!(
                edge.target.index() < g.node_count(),
                "edge {node} -> {} leaves the graph",
                edge.target
            );
        }
    }
}

/// Labels are unique and map back to their node.
pub fn assert_labels_round_trip(g: &WeightedGraph) {
    let mut seen = IndexSet::new();
    for node in g.nodes() {
        let label = g.label(node).expect("every node has a label");
        assert!(seen.insert(label.to_string()), "label '{label}' repeated");
        assert_eq!(g.node(label), Some(node));
    }
}

/// The initial position is a node of the graph.
pub fn assert_initial_in_range(g: &WeightedGraph) {
    assert!(g.initial_position().index() < g.node_count());
}

/// Run all checks.
pub fn run_full_compliance(g: &WeightedGraph) {
    assert_weights_valid(g);
    assert_targets_in_range(g);
    assert_labels_round_trip(g);
    assert_initial_in_range(g);
}
