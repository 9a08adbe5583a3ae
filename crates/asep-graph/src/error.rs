//! Error types for graph construction and parsing.

use asep_core::NodeId;
use std::fmt;

/// Errors arising from graph construction, builders, or parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Attempted to build a graph with no nodes.
    EmptyGraph,
    /// Two nodes were given the same label.
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
    /// A node id does not belong to this graph.
    UnknownNode {
        /// The offending id.
        node: NodeId,
    },
    /// An edge weight is negative, NaN, or infinite.
    InvalidWeight {
        /// Source of the edge.
        from: NodeId,
        /// Target of the edge.
        to: NodeId,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge probability lies outside `[0, 1]`.
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },
    /// The graph would need more nodes than `NodeId` can address.
    TooManyNodes {
        /// Requested node count.
        requested: usize,
    },
    /// A weight-matrix row has the wrong number of entries.
    NotSquare {
        /// 1-based line number of the row.
        line: usize,
        /// Entries expected (the number of rows).
        expected: usize,
        /// Entries found.
        found: usize,
    },
    /// A weight-matrix entry could not be read as a number.
    Parse {
        /// 1-based line number of the entry.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A weight-matrix file could not be read.
    Io {
        /// The path that was opened.
        path: String,
        /// The underlying I/O error message.
        reason: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGraph => write!(f, "graph must have at least one node"),
            Self::DuplicateLabel { label } => write!(f, "duplicate node label '{label}'"),
            Self::UnknownNode { node } => write!(f, "node {node} is not in this graph"),
            Self::InvalidWeight { from, to, weight } => {
                write!(
                    f,
                    "edge {from} -> {to} weight must be finite and >= 0, got {weight}"
                )
            }
            Self::InvalidProbability { value } => {
                write!(f, "edge probability must be in [0, 1], got {value}")
            }
            Self::TooManyNodes { requested } => {
                write!(f, "{requested} nodes exceeds u32::MAX")
            }
            Self::NotSquare {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {line}: expected {expected} weights, found {found}"
                )
            }
            Self::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Io { path, reason } => write!(f, "cannot read '{path}': {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}
