//! The weighted directed graph and its builder.

use crate::error::GraphError;
use asep_core::{NodeId, Universe};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// A directed, weighted out-edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Node the edge points to.
    pub target: NodeId,
    /// Relative propensity of choosing this edge. Finite and `>= 0`.
    pub weight: f64,
}

/// A finite directed graph with labelled nodes and weighted edges.
///
/// Node ids are assigned sequentially in insertion order. Labels are
/// unique. One node is designated as the initial state, which is where
/// every particle of a simulation starts.
///
/// Always non-empty: [`GraphBuilder::build`] rejects graphs without nodes.
///
/// # Examples
///
/// ```
/// use asep_core::Universe;
/// use asep_graph::WeightedGraph;
///
/// let mut b = WeightedGraph::builder();
/// let a = b.add_node("a").unwrap();
/// let z = b.add_node("z").unwrap();
/// b.add_edge(a, z, 2.0).unwrap();
/// let g = b.build().unwrap();
///
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.initial_position(), a);
/// assert_eq!(g.out_edges(a)[0].target, z);
/// assert!(g.out_edges(z).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    labels: IndexSet<String>,
    out: Vec<SmallVec<[Edge; 8]>>,
    initial: NodeId,
}

impl WeightedGraph {
    /// Start assembling a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of directed edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(|edges| edges.len()).sum()
    }

    /// All node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(|i| NodeId(i as u32))
    }

    /// Look up a node by label.
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.labels.get_index_of(label).map(|i| NodeId(i as u32))
    }

    /// Label of `node`, or `None` if it is not in this graph.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get_index(node.index()).map(String::as_str)
    }

    /// Labels for a sequence of nodes, e.g. a position snapshot.
    ///
    /// Returns `None` if any node is not in this graph.
    pub fn labels_of(&self, nodes: &[NodeId]) -> Option<Vec<&str>> {
        nodes.iter().map(|&n| self.label(n)).collect()
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Empty for nodes without successors and for unknown nodes.
    pub fn out_edges(&self, node: NodeId) -> &[Edge] {
        self.out
            .get(node.index())
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Sum of outgoing weights of `node`.
    pub fn out_weight(&self, node: NodeId) -> f64 {
        self.out_edges(node).iter().map(|e| e.weight).sum()
    }

    /// The designated initial node.
    pub fn initial(&self) -> NodeId {
        self.initial
    }
}

impl Universe for WeightedGraph {
    type Position = NodeId;

    fn initial_position(&self) -> NodeId {
        self.initial
    }
}

/// Incremental builder for [`WeightedGraph`].
///
/// Nodes must be added before edges that mention them. The first node
/// added is the initial node unless [`set_initial`](Self::set_initial)
/// picks another.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    labels: IndexSet<String>,
    out: Vec<SmallVec<[Edge; 8]>>,
    initial: Option<NodeId>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with a unique label and return its id.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId, GraphError> {
        let label = label.into();
        let index = self.labels.len();
        if index >= u32::MAX as usize {
            return Err(GraphError::TooManyNodes {
                requested: index + 1,
            });
        }
        if !self.labels.insert(label.clone()) {
            return Err(GraphError::DuplicateLabel { label });
        }
        self.out.push(SmallVec::new());
        Ok(NodeId(index as u32))
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Self-loops are allowed and model holding: a particle that picks one
    /// proposes to stay where it is.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), GraphError> {
        self.check_node(to)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        let edges = self
            .out
            .get_mut(from.index())
            .ok_or(GraphError::UnknownNode { node: from })?;
        edges.push(Edge { target: to, weight });
        Ok(())
    }

    /// Designate the node particles start from.
    pub fn set_initial(&mut self, node: NodeId) -> Result<(), GraphError> {
        self.check_node(node)?;
        self.initial = Some(node);
        Ok(())
    }

    /// Number of nodes added so far.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Finish the graph.
    ///
    /// Returns `Err(GraphError::EmptyGraph)` if no node was added.
    pub fn build(self) -> Result<WeightedGraph, GraphError> {
        if self.labels.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        Ok(WeightedGraph {
            labels: self.labels,
            out: self.out,
            initial: self.initial.unwrap_or(NodeId(0)),
        })
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() < self.labels.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn triangle() -> WeightedGraph {
        let mut b = WeightedGraph::builder();
        let x = b.add_node("x").unwrap();
        let y = b.add_node("y").unwrap();
        let z = b.add_node("z").unwrap();
        b.add_edge(x, y, 1.0).unwrap();
        b.add_edge(y, z, 0.5).unwrap();
        b.add_edge(z, x, 0.25).unwrap();
        b.add_edge(z, z, 0.75).unwrap();
        b.set_initial(y).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn counts_nodes_and_edges() {
        let g = triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.nodes().count(), 3);
    }

    #[test]
    fn initial_defaults_to_first_node() {
        let mut b = GraphBuilder::new();
        let first = b.add_node("first").unwrap();
        b.add_node("second").unwrap();
        let g = b.build().unwrap();
        assert_eq!(g.initial_position(), first);
    }

    #[test]
    fn explicit_initial_wins() {
        let g = triangle();
        assert_eq!(g.initial_position(), g.node("y").unwrap());
    }

    #[test]
    fn label_lookup_both_ways() {
        let g = triangle();
        let z = g.node("z").unwrap();
        assert_eq!(z, NodeId(2));
        assert_eq!(g.label(z), Some("z"));
        assert_eq!(g.label(NodeId(9)), None);
        assert_eq!(g.node("w"), None);
    }

    #[test]
    fn labels_of_snapshot() {
        let g = triangle();
        assert_eq!(
            g.labels_of(&[NodeId(2), NodeId(0)]),
            Some(vec!["z", "x"])
        );
        assert_eq!(g.labels_of(&[NodeId(0), NodeId(3)]), None);
    }

    #[test]
    fn out_weight_sums_edges() {
        let g = triangle();
        assert_eq!(g.out_weight(NodeId(2)), 1.0);
        assert_eq!(g.out_weight(NodeId(7)), 0.0);
    }

    #[test]
    fn empty_builder_rejected() {
        assert_eq!(GraphBuilder::new().build().unwrap_err(), GraphError::EmptyGraph);
    }

    #[test]
    fn duplicate_label_rejected() {
        let mut b = GraphBuilder::new();
        b.add_node("a").unwrap();
        assert_eq!(
            b.add_node("a").unwrap_err(),
            GraphError::DuplicateLabel { label: "a".into() }
        );
        assert_eq!(b.node_count(), 1);
    }

    #[test]
    fn edge_to_unknown_node_rejected() {
        let mut b = GraphBuilder::new();
        let a = b.add_node("a").unwrap();
        assert_eq!(
            b.add_edge(a, NodeId(1), 1.0).unwrap_err(),
            GraphError::UnknownNode { node: NodeId(1) }
        );
        assert_eq!(
            b.add_edge(NodeId(4), a, 1.0).unwrap_err(),
            GraphError::UnknownNode { node: NodeId(4) }
        );
    }

    #[test]
    fn bad_weights_rejected() {
        let mut b = GraphBuilder::new();
        let a = b.add_node("a").unwrap();
        for w in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                b.add_edge(a, a, w),
                Err(GraphError::InvalidWeight { .. })
            ));
        }
        b.add_edge(a, a, 0.0).unwrap();
    }

    #[test]
    fn set_initial_unknown_rejected() {
        let mut b = GraphBuilder::new();
        b.add_node("a").unwrap();
        assert!(b.set_initial(NodeId(1)).is_err());
    }

    #[test]
    fn compliance() {
        compliance::run_full_compliance(&triangle());
    }
}
