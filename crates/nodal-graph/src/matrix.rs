//! Adjacency matrix derivation.
//!
//! The matrix is square and labelled on both axes by node name, in
//! lexicographic order. A cell holds `true` (or the value of a chosen edge
//! attribute) when an edge joins the two nodes, and the fill value
//! otherwise.
//!
//! Both `[left][right]` and `[right][left]` are written for every edge,
//! oriented or not, so the result is always symmetric.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use nodal_core::{Attributed, Value};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use tracing::debug;

/// Options for [`Graph::derive_adjacency_matrix_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixOptions {
    /// Value of cells whose node pair has no edge.
    pub fill_value: Value,

    /// Edge attribute to use as cell value. `None` marks presence with `true`.
    pub edge_key: Option<String>,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            fill_value: Value::Bool(false),
            edge_key: None,
        }
    }
}

/// A square matrix labelled by node name on both axes.
///
/// Labels are sorted and unique, and there is one row of `len()` cells per
/// label. Deserialization rejects input that breaks either rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixParts")]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<Value>>,
}

/// Unchecked wire shape of an [`AdjacencyMatrix`].
#[derive(Deserialize)]
struct MatrixParts {
    labels: Vec<String>,
    cells: Vec<Vec<Value>>,
}

impl TryFrom<MatrixParts> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(parts: MatrixParts) -> Result<Self> {
        let MatrixParts { labels, cells } = parts;

        if let Some(pair) = labels.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(GraphError::InvalidMatrix(format!(
                "labels must be sorted and unique, found \"{}\" before \"{}\"",
                pair[0], pair[1]
            )));
        }
        if cells.len() != labels.len() {
            return Err(GraphError::InvalidMatrix(format!(
                "{} labels but {} rows",
                labels.len(),
                cells.len()
            )));
        }
        if let Some((i, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != labels.len()) {
            return Err(GraphError::InvalidMatrix(format!(
                "row \"{}\" has {} cells, expected {}",
                labels[i],
                row.len(),
                labels.len()
            )));
        }

        Ok(Self { labels, cells })
    }
}

/// One labelled row of an [`AdjacencyMatrix`].
///
/// The row label is kept apart from the cells, so a node may be named
/// anything without clashing with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRecord {
    /// Row label.
    pub node: String,

    /// Cell values keyed by column label.
    pub cells: BTreeMap<String, Value>,
}

impl AdjacencyMatrix {
    /// Row and column labels, sorted.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of a label on either axis.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|label| label.as_str().cmp(name))
            .ok()
    }

    /// Cell at `(row, col)`, addressed by node names.
    pub fn get(&self, row: &str, col: &str) -> Option<&Value> {
        let r = self.index_of(row)?;
        let c = self.index_of(col)?;
        self.cells.get(r)?.get(c)
    }

    /// One row, addressed by node name.
    pub fn row(&self, name: &str) -> Option<&[Value]> {
        let r = self.index_of(name)?;
        self.cells.get(r).map(Vec::as_slice)
    }

    /// Rows paired with their labels.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Raw cells, row-major.
    pub fn cells(&self) -> &[Vec<Value>] {
        &self.cells
    }

    /// One record per row, in label order.
    ///
    /// This is the row-oriented shape dataframe libraries ingest.
    pub fn to_records(&self) -> Vec<MatrixRecord> {
        self.rows()
            .map(|(label, row)| MatrixRecord {
                node: label.to_string(),
                cells: self.labels.iter().cloned().zip(row.iter().cloned()).collect(),
            })
            .collect()
    }

    /// Writes the matrix as CSV: a header of column labels after an empty
    /// corner cell, then one row per node.
    ///
    /// String cells are written bare, everything else as JSON.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::Writer::from_writer(writer);

        out.write_record(std::iter::once("").chain(self.labels.iter().map(String::as_str)))?;
        for (label, row) in self.rows() {
            out.write_record(std::iter::once(label.to_string()).chain(row.iter().map(cell_text)))?;
        }

        out.flush()?;
        Ok(())
    }

    /// The CSV rendering as a string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_csv(&mut out)?;
        String::from_utf8(out).map_err(|e| GraphError::InvalidMatrix(e.to_string()))
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Graph {
    /// Derives the adjacency matrix.
    ///
    /// Cells for node pairs without an edge hold `fill_value`. With an
    /// `edge_key`, connected cells hold that attribute of the edge;
    /// otherwise they hold `true`.
    ///
    /// Fails with `KeyMissing` if an edge lacks `edge_key`, and with
    /// `OutOfRange` if an edge endpoint is not a node of this graph.
    pub fn derive_adjacency_matrix(
        &self,
        fill_value: impl Into<Value>,
        edge_key: Option<&str>,
    ) -> Result<AdjacencyMatrix> {
        let labels: Vec<String> = self.node_names().into_iter().map(String::from).collect();
        let positions: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let size = labels.len();
        let mut cells: Vec<Vec<Option<Value>>> = vec![vec![None; size]; size];

        for edge in self.edges() {
            let value = match edge_key {
                None => Value::Bool(true),
                Some(key) => edge.require_attr(key)?.clone(),
            };

            let locate = |node: &str| {
                positions
                    .get(node)
                    .copied()
                    .ok_or_else(|| GraphError::OutOfRange {
                        edge: edge.name().to_string(),
                        node: node.to_string(),
                    })
            };
            let left = locate(&edge.left().name)?;
            let right = locate(&edge.right().name)?;

            cells[left][right] = Some(value.clone());
            cells[right][left] = Some(value);
        }

        let fill_value = fill_value.into();
        let cells = cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| fill_value.clone()))
                    .collect()
            })
            .collect();

        debug!(
            "Derived {}x{} adjacency matrix from {} edges",
            size,
            size,
            self.edge_count()
        );

        Ok(AdjacencyMatrix { labels, cells })
    }

    /// Derives the adjacency matrix from an options struct.
    pub fn derive_adjacency_matrix_with(&self, options: &MatrixOptions) -> Result<AdjacencyMatrix> {
        self.derive_adjacency_matrix(options.fill_value.clone(), options.edge_key.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodal_core::{Edge, Node};
    use serde_json::json;

    fn abc_graph() -> Graph {
        let mut graph = Graph::new();
        for name in ["C", "A", "B"] {
            graph.add_node(name);
        }
        graph.add_edge(Edge::new(Node::new("A"), Node::new("B")));
        graph
    }

    #[test]
    fn test_matrix_symmetry() {
        let matrix = abc_graph().derive_adjacency_matrix(false, None).unwrap();

        assert_eq!(matrix.labels(), ["A", "B", "C"]);
        assert_eq!(matrix.get("A", "B"), Some(&json!(true)));
        assert_eq!(matrix.get("B", "A"), Some(&json!(true)));

        for (row, col) in [("A", "C"), ("C", "A"), ("B", "C"), ("C", "B")] {
            assert_eq!(matrix.get(row, col), Some(&json!(false)));
        }
        for name in ["A", "B", "C"] {
            assert_eq!(matrix.get(name, name), Some(&json!(false)));
        }
    }

    #[test]
    fn test_oriented_edge_is_still_symmetric() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_node("B");
        graph.add_edge(
            Edge::builder(Node::new("B"), Node::new("A"))
                .oriented(true)
                .build(),
        );

        let matrix = graph.derive_adjacency_matrix(false, None).unwrap();
        assert_eq!(matrix.get("A", "B"), Some(&json!(true)));
        assert_eq!(matrix.get("B", "A"), Some(&json!(true)));
    }

    #[test]
    fn test_custom_fill_and_edge_key() {
        let mut graph = Graph::new();
        graph.add_node("X");
        graph.add_node("Y");
        graph.add_edge(
            Edge::builder(Node::new("X"), Node::new("Y"))
                .attr("weight", 7)
                .build(),
        );

        let matrix = graph.derive_adjacency_matrix(0, Some("weight")).unwrap();
        assert_eq!(matrix.get("X", "Y"), Some(&json!(7)));
        assert_eq!(matrix.get("Y", "X"), Some(&json!(7)));
        assert_eq!(matrix.get("X", "X"), Some(&json!(0)));

        let err = graph.derive_adjacency_matrix(0, Some("missing")).unwrap_err();
        match err {
            GraphError::KeyMissing { edge, key } => {
                assert_eq!(edge, "X == Y");
                assert_eq!(key, "missing");
            }
            other => panic!("expected KeyMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_graph() {
        let matrix = Graph::new().derive_adjacency_matrix(false, None).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
        assert!(matrix.cells().is_empty());
    }

    #[test]
    fn test_self_loop_marks_diagonal() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_edge(Edge::new(Node::new("A"), Node::new("A")));

        let matrix = graph.derive_adjacency_matrix(false, None).unwrap();
        assert_eq!(matrix.get("A", "A"), Some(&json!(true)));
    }

    #[test]
    fn test_dangling_endpoint_is_out_of_range() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_edge(Edge::new(Node::new("A"), Node::new("Z")));

        match graph.derive_adjacency_matrix(false, None) {
            Err(GraphError::OutOfRange { edge, node }) => {
                assert_eq!(edge, "A == Z");
                assert_eq!(node, "Z");
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_options_default() {
        let graph = abc_graph();
        let with_options = graph
            .derive_adjacency_matrix_with(&MatrixOptions::default())
            .unwrap();
        assert_eq!(with_options, graph.derive_adjacency_matrix(false, None).unwrap());
    }

    #[test]
    fn test_records_and_csv() {
        let matrix = abc_graph().derive_adjacency_matrix(false, None).unwrap();

        let records = matrix.to_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].node, "A");
        assert_eq!(records[0].cells["B"], json!(true));
        assert_eq!(records[2].cells["A"], json!(false));

        assert_eq!(
            matrix.to_csv_string().unwrap(),
            ",A,B,C\nA,false,true,false\nB,true,false,false\nC,false,false,false\n"
        );
        assert_eq!(matrix.row("C").unwrap().len(), 3);
        assert!(matrix.row("Q").is_none());
    }

    #[test]
    fn test_record_label_does_not_clash_with_node_named_node() {
        let mut graph = Graph::new();
        graph.add_node("node");
        graph.add_node("x");
        graph.add_edge(Edge::new(Node::new("node"), Node::new("x")));

        let records = graph.derive_adjacency_matrix(false, None).unwrap().to_records();
        assert_eq!(records[0].node, "node");
        assert_eq!(records[0].cells["x"], json!(true));
        assert_eq!(records[1].node, "x");
        assert_eq!(records[1].cells["node"], json!(true));
        assert_eq!(records[1].cells["x"], json!(false));
    }

    #[test]
    fn test_csv_quotes_labels_with_delimiters() {
        let mut graph = Graph::new();
        graph.add_node("a,b");
        graph.add_node("c");
        graph.add_node("say \"hi\"");
        graph.add_edge(Edge::new(Node::new("a,b"), Node::new("c")));

        let text = graph
            .derive_adjacency_matrix(false, None)
            .unwrap()
            .to_csv_string()
            .unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(&rows[0][1], "a,b");
        assert_eq!(&rows[0][3], "say \"hi\"");
        assert_eq!(&rows[1][0], "a,b");
        assert_eq!(&rows[1][2], "true");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let matrix = abc_graph().derive_adjacency_matrix(0, None).unwrap();
        let text = serde_json::to_string(&matrix).unwrap();
        let loaded: AdjacencyMatrix = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_deserialize_rejects_ragged_cells() {
        let ragged = serde_json::from_str::<AdjacencyMatrix>(
            r#"{"labels": ["A", "B"], "cells": [[true]]}"#,
        );
        assert!(ragged.is_err());

        let short_row = serde_json::from_str::<AdjacencyMatrix>(
            r#"{"labels": ["A", "B"], "cells": [[true, false], [true]]}"#,
        );
        assert!(short_row.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unsorted_labels() {
        let unsorted = serde_json::from_str::<AdjacencyMatrix>(
            r#"{"labels": ["B", "A"], "cells": [[false, true], [true, false]]}"#,
        );
        assert!(unsorted.is_err());

        let duplicate = serde_json::from_str::<AdjacencyMatrix>(
            r#"{"labels": ["A", "A"], "cells": [[false, true], [true, false]]}"#,
        );
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_checked_conversion_reports_invalid_matrix() {
        let err = AdjacencyMatrix::try_from(MatrixParts {
            labels: vec!["A".to_string(), "B".to_string()],
            cells: vec![vec![json!(true)]],
        })
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidMatrix(_)));
    }
}
