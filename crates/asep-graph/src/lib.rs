//! Weighted directed graph universes for ASEP simulations.
//!
//! [`WeightedGraph`] implements [`asep_core::Universe`] with
//! [`NodeId`](asep_core::NodeId) positions. Graphs are assembled through
//! [`GraphBuilder`], produced by one of the [`builders`], or parsed from a
//! weight matrix via [`str::parse`].
//!
//! # Builders
//!
//! - [`complete_graph`]: every ordered pair joined with unit weight
//! - [`random_weighted_graph`]: symmetric random graph with edge probability `p`
//! - [`random_weighted_complete_directed_graph`]: independent weights on every ordered pair
//! - [`random_weighted_complete_directed_graph_with_source_sink`]: the above plus reservoirs
//! - [`random_weighted_line_with_source_sink`]: a line fed by a source and drained by a sink

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builders;
pub mod error;
pub mod graph;
pub mod parse;

#[cfg(test)]
pub(crate) mod compliance;

pub use builders::{
    complete_graph, random_weighted_complete_directed_graph,
    random_weighted_complete_directed_graph_with_source_sink, random_weighted_graph,
    random_weighted_line_with_source_sink, SINK_LABEL, SOURCE_LABEL,
};
pub use error::GraphError;
pub use graph::{Edge, GraphBuilder, WeightedGraph};
