//! Sampled views of a graph.
//!
//! A sample is the first few edges and nodes in name order. Only the
//! object view is rendered here; the tabular and plot views are left to
//! collaborators and report `UnimplementedStrategy`.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use nodal_core::{Edge, Node};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default number of nodes and edges in a sample.
pub const DEFAULT_SAMPLE_LEN: usize = 5;

/// How a sample is meant to be viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Elements rendered through their `Display` impls.
    #[default]
    Obj,
    /// Tabular view.
    Table,
    /// Plotted view.
    Plot,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Obj => "obj",
            ViewKind::Table => "table",
            ViewKind::Plot => "plot",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "obj" => Ok(ViewKind::Obj),
            "table" => Ok(ViewKind::Table),
            "plot" => Ok(ViewKind::Plot),
            other => Err(GraphError::UnknownView(other.to_string())),
        }
    }
}

/// A prefix of a graph's edges and nodes.
#[derive(Debug, Clone)]
pub struct GraphSample<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
    pub total_nodes: usize,
    pub total_edges: usize,
}

impl std::fmt::Display for GraphSample<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "_______________Edges ({} of {})_______________",
            self.edges.len(),
            self.total_edges
        )?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        write!(
            f,
            "_______________Nodes ({} of {})_______________",
            self.nodes.len(),
            self.total_nodes
        )?;
        for node in &self.nodes {
            write!(f, "\n{}", node)?;
        }
        Ok(())
    }
}

impl Graph {
    /// Takes the first `node_len` nodes and `edge_len` edges by name.
    pub fn sample(&self, node_len: usize, edge_len: usize, view_as: ViewKind) -> Result<GraphSample<'_>> {
        match view_as {
            ViewKind::Obj => {}
            ViewKind::Table | ViewKind::Plot => {
                return Err(GraphError::UnimplementedStrategy(format!(
                    "sample view \"{}\"",
                    view_as
                )));
            }
        }

        let mut nodes = self.nodes();
        nodes.truncate(node_len);
        let mut edges = self.edges();
        edges.truncate(edge_len);

        Ok(GraphSample {
            nodes,
            edges,
            total_nodes: self.node_count(),
            total_edges: self.edge_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Graph {
        let mut graph = Graph::new();
        graph.add_nodes_from_count(len, None);
        for i in 1..len {
            graph.add_edge(Edge::new(
                Node::new((i - 1).to_string()),
                Node::new(i.to_string()),
            ));
        }
        graph
    }

    #[test]
    fn test_sample_truncates_in_name_order() {
        let graph = chain(8);
        let sample = graph.sample(DEFAULT_SAMPLE_LEN, 2, ViewKind::Obj).unwrap();

        let names: Vec<&str> = sample.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["0", "1", "2", "3", "4"]);
        assert_eq!(sample.edges.len(), 2);
        assert_eq!(sample.total_nodes, 8);
        assert_eq!(sample.total_edges, 7);
    }

    #[test]
    fn test_sample_render() {
        let graph = chain(2);
        let sample = graph.sample(5, 5, ViewKind::default()).unwrap();
        assert_eq!(
            sample.to_string(),
            "_______________Edges (1 of 1)_______________\n\
             0 == 1 {}\n\
             _______________Nodes (2 of 2)_______________\n\
             0 {}\n\
             1 {}"
        );
    }

    #[test]
    fn test_other_views_are_unimplemented() {
        let graph = chain(3);
        assert!(matches!(
            graph.sample(5, 5, ViewKind::Table),
            Err(GraphError::UnimplementedStrategy(_))
        ));
        assert!(matches!(
            graph.sample(5, 5, ViewKind::Plot),
            Err(GraphError::UnimplementedStrategy(_))
        ));
    }

    #[test]
    fn test_parse_view_kind() {
        assert_eq!("table".parse::<ViewKind>().unwrap(), ViewKind::Table);
        assert!(matches!(
            "chart".parse::<ViewKind>(),
            Err(GraphError::UnknownView(v)) if v == "chart"
        ));
    }
}
