//! Ready-made graph universes.
//!
//! Interior nodes are labelled `"0"`, `"1"`, ... in id order. Graphs with
//! reservoirs add a [`SOURCE_LABEL`] node, which is the initial state and
//! holds particles waiting to enter, and a [`SINK_LABEL`] node, which only
//! holds. Holding is modelled with a weighted self-loop; pair these graphs
//! with an exclusion rule that exempts the reservoirs.
//!
//! Random weights are drawn uniformly from `(0, 1]`.

use crate::error::GraphError;
use crate::graph::{GraphBuilder, WeightedGraph};
use asep_core::NodeId;
use rand::Rng;

/// Label of the birth reservoir in source/sink graphs.
pub const SOURCE_LABEL: &str = "source";

/// Label of the death reservoir in source/sink graphs.
pub const SINK_LABEL: &str = "sink";

fn draw_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.random::<f64>()
}

fn interior_nodes(b: &mut GraphBuilder, n: u32) -> Result<Vec<NodeId>, GraphError> {
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }
    (0..n).map(|i| b.add_node(i.to_string())).collect()
}

/// Complete graph on `n` nodes: every ordered pair of distinct nodes is
/// joined with weight 1. Node `"0"` is initial.
///
/// ```
/// let g = asep_graph::complete_graph(6).unwrap();
/// assert_eq!(g.node_count(), 6);
/// assert_eq!(g.edge_count(), 30);
/// ```
pub fn complete_graph(n: u32) -> Result<WeightedGraph, GraphError> {
    let mut b = GraphBuilder::new();
    let nodes = interior_nodes(&mut b, n)?;
    for &from in &nodes {
        for &to in &nodes {
            if from != to {
                b.add_edge(from, to, 1.0)?;
            }
        }
    }
    b.build()
}

/// Random symmetric graph: each unordered pair is joined with probability
/// `p`, by two opposite edges sharing one random weight.
pub fn random_weighted_graph<R: Rng + ?Sized>(
    n: u32,
    p: f64,
    rng: &mut R,
) -> Result<WeightedGraph, GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidProbability { value: p });
    }
    let mut b = GraphBuilder::new();
    let nodes = interior_nodes(&mut b, n)?;
    for (i, &a) in nodes.iter().enumerate() {
        for &c in &nodes[i + 1..] {
            if rng.random_bool(p) {
                let w = draw_weight(rng);
                b.add_edge(a, c, w)?;
                b.add_edge(c, a, w)?;
            }
        }
    }
    b.build()
}

/// Complete directed graph with an independent random weight on every
/// ordered pair of distinct nodes.
pub fn random_weighted_complete_directed_graph<R: Rng + ?Sized>(
    n: u32,
    rng: &mut R,
) -> Result<WeightedGraph, GraphError> {
    let mut b = GraphBuilder::new();
    let nodes = interior_nodes(&mut b, n)?;
    add_random_complete_edges(&mut b, &nodes, rng)?;
    b.build()
}

/// [`random_weighted_complete_directed_graph`] with reservoirs: the source
/// feeds every interior node and every interior node drains into the sink.
pub fn random_weighted_complete_directed_graph_with_source_sink<R: Rng + ?Sized>(
    n: u32,
    rng: &mut R,
) -> Result<WeightedGraph, GraphError> {
    let mut b = GraphBuilder::new();
    let nodes = interior_nodes(&mut b, n)?;
    add_random_complete_edges(&mut b, &nodes, rng)?;
    let (source, sink) = add_reservoirs(&mut b, rng)?;
    for &node in &nodes {
        b.add_edge(source, node, draw_weight(rng))?;
        b.add_edge(node, sink, draw_weight(rng))?;
    }
    b.build()
}

/// A line `"0" - "1" - ... - "n-1"` with independent random weights in each
/// direction, fed at `"0"` by the source and drained at `"n-1"` into the sink.
pub fn random_weighted_line_with_source_sink<R: Rng + ?Sized>(
    n: u32,
    rng: &mut R,
) -> Result<WeightedGraph, GraphError> {
    let mut b = GraphBuilder::new();
    let nodes = interior_nodes(&mut b, n)?;
    for pair in nodes.windows(2) {
        b.add_edge(pair[0], pair[1], draw_weight(rng))?;
        b.add_edge(pair[1], pair[0], draw_weight(rng))?;
    }
    let (source, sink) = add_reservoirs(&mut b, rng)?;
    if let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) {
        b.add_edge(source, first, draw_weight(rng))?;
        b.add_edge(last, sink, draw_weight(rng))?;
    }
    b.build()
}

fn add_random_complete_edges<R: Rng + ?Sized>(
    b: &mut GraphBuilder,
    nodes: &[NodeId],
    rng: &mut R,
) -> Result<(), GraphError> {
    for &from in nodes {
        for &to in nodes {
            if from != to {
                b.add_edge(from, to, draw_weight(rng))?;
            }
        }
    }
    Ok(())
}

// Source gets a random holding loop and becomes initial; sink holds with weight 1.
fn add_reservoirs<R: Rng + ?Sized>(
    b: &mut GraphBuilder,
    rng: &mut R,
) -> Result<(NodeId, NodeId), GraphError> {
    let source = b.add_node(SOURCE_LABEL)?;
    let sink = b.add_node(SINK_LABEL)?;
    b.add_edge(source, source, draw_weight(rng))?;
    b.add_edge(sink, sink, 1.0)?;
    b.set_initial(source)?;
    Ok((source, sink))
}
