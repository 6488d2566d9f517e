//! Nodal Graph - Attributed graph container
//!
//! This crate collects nodes and edges into a [`Graph`] and derives views
//! from it, chiefly the adjacency matrix.
//!
//! # Architecture
//!
//! The graph is a pair of sets keyed by name:
//! - Nodes, by their own name
//! - Edges, by the name derived from their endpoints and orientation
//!
//! Around it sit bulk insertion, sampling, a description-driven builder,
//! and an export to petgraph.
//!
//! # Example
//!
//! ```
//! use nodal_graph::Graph;
//! use nodal_core::{Edge, Node, Value};
//!
//! let mut graph = Graph::new();
//! graph.add_node("A");
//! graph.add_node("B");
//! graph.add_edge(Edge::new(Node::new("A"), Node::new("B")));
//!
//! let matrix = graph.derive_adjacency_matrix(false, None).unwrap();
//! assert_eq!(matrix.get("B", "A"), Some(&Value::Bool(true)));
//! ```

mod builder;
mod bulk;
mod error;
mod export;
mod graph;
mod matrix;
mod sample;

pub use builder::{EdgeDescription, GraphBuilder, GraphDescription, NodeDescription};
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphStats, NodeQuery, NodeSpec};
pub use matrix::{AdjacencyMatrix, MatrixOptions, MatrixRecord};
pub use sample::{GraphSample, ViewKind, DEFAULT_SAMPLE_LEN};
