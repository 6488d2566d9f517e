//! Export to petgraph.
//!
//! Downstream code that wants traversal or layout algorithms can take the
//! graph as a `petgraph::Graph`. Node indexes follow node name order.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use nodal_core::{Attributed, Edge, Node};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

impl Graph {
    /// Copies the graph into a directed petgraph graph.
    ///
    /// Each edge is added from its left to its right endpoint; unoriented
    /// edges keep that order too, and callers can check `Edge::is_orient`.
    pub fn to_petgraph(&self) -> Result<DiGraph<Node, Edge>> {
        let mut out = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.node_count());

        for node in self.nodes() {
            index.insert(node.name.as_str(), out.add_node(node.clone()));
        }

        for edge in self.edges() {
            let lookup = |node: &Node| {
                index
                    .get(node.name.as_str())
                    .copied()
                    .ok_or_else(|| GraphError::OutOfRange {
                        edge: edge.name().to_string(),
                        node: node.name.clone(),
                    })
            };
            let from = lookup(edge.left())?;
            let to = lookup(edge.right())?;
            out.add_edge(from, to, edge.clone());
        }

        Ok(out)
    }
}
