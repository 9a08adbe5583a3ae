//! Weight-matrix text format.
//!
//! One row per line, entries separated by whitespace. Entry `j` of row `i`
//! is the weight of edge `i -> j`; zero means no edge. Blank lines and
//! anything after `#` are ignored. Node `i` is labelled `"i"` and node 0
//! is initial. [`WeightedGraph::from_path`] reads the same format from a
//! file.
//!
//! ```text
//! # three-node cycle
//! 0 1 0
//! 0 0 1
//! 1 0 0
//! ```

use crate::error::GraphError;
use crate::graph::{GraphBuilder, WeightedGraph};
use asep_core::NodeId;
use std::path::Path;
use std::str::FromStr;

impl FromStr for WeightedGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<(usize, Vec<f64>)> = Vec::new();
        for (i, raw) in s.lines().enumerate() {
            let line = i + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }
            let row = content
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<f64>().map_err(|e| GraphError::Parse {
                        line,
                        reason: format!("'{tok}': {e}"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push((line, row));
        }

        let n = rows.len();
        let mut b = GraphBuilder::new();
        for i in 0..n {
            b.add_node(i.to_string())?;
        }
        for (from, (line, row)) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    line: *line,
                    expected: n,
                    found: row.len(),
                });
            }
            for (to, &weight) in row.iter().enumerate() {
                if weight != 0.0 {
                    b.add_edge(NodeId(from as u32), NodeId(to as u32), weight)?;
                }
            }
        }
        b.build()
    }
}

impl WeightedGraph {
    /// Read a weight matrix from the file at `path`.
    ///
    /// # Errors
    ///
    /// [`GraphError::Io`] if the file cannot be read, otherwise any error
    /// from parsing its contents.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GraphError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use asep_core::Universe;

    #[test]
    fn parses_cycle_with_comments() {
        let text = "# cycle\n0 1 0\n\n0 0 2.5 # heavy\n1 0 0\n";
        let g: WeightedGraph = text.parse().unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.out_edges(NodeId(1))[0].weight, 2.5);
        assert_eq!(g.label(g.initial_position()), Some("0"));
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn diagonal_entries_become_holding_loops() {
        let g: WeightedGraph = "0.5 0.5\n0 1".parse().unwrap();
        assert_eq!(g.out_edges(NodeId(0)).len(), 2);
        assert_eq!(g.out_edges(NodeId(1))[0].target, NodeId(1));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = "0 1\n1\n".parse::<WeightedGraph>().unwrap_err();
        assert_eq!(
            err,
            GraphError::NotSquare {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn width_must_match_row_count() {
        let err = "0 1 1\n1 0 0\n".parse::<WeightedGraph>().unwrap_err();
        assert_eq!(
            err,
            GraphError::NotSquare {
                line: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn garbage_rejected_with_line_number() {
        let err = "0 1\n1 x\n".parse::<WeightedGraph>().unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn negative_weight_rejected() {
        let err = "0 -1\n1 0\n".parse::<WeightedGraph>().unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn empty_text_rejected() {
        assert_eq!(
            "# nothing\n\n".parse::<WeightedGraph>().unwrap_err(),
            GraphError::EmptyGraph
        );
    }

    fn scratch_file(name: &str) -> std::path::PathBuf {
        let unique = format!(
            "asep_graph_{name}_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        );
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn reads_matrix_from_file() {
        let path = scratch_file("ring");
        std::fs::write(&path, "# ring\n0 1 0\n0 0 1\n1 0 0\n").unwrap();
        let g = WeightedGraph::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.out_edges(NodeId(2))[0].target, NodeId(0));
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = scratch_file("missing");
        let err = WeightedGraph::from_path(&path).unwrap_err();
        match &err {
            GraphError::Io { path: shown, .. } => {
                assert_eq!(shown, &path.display().to_string())
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.to_string().starts_with("cannot read"));
    }
}
