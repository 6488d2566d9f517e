//! Graph builder for constructing a graph from a declarative description.
//!
//! The builder takes node names with attributes, and edges given by the
//! names of their endpoints, and resolves those names into nodes.

use crate::error::Result;
use crate::graph::{Graph, NodeSpec};
use nodal_core::{Attributes, Edge, Node};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A node in a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    pub name: String,
    #[serde(default)]
    pub attrs: Attributes,
}

/// An edge in a [`GraphDescription`], with endpoints given by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub left: String,
    pub right: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, alias = "oriented")]
    pub is_oriented: bool,
    #[serde(default)]
    pub attrs: Attributes,
}

/// Serializable description of a whole graph.
///
/// ```json
/// {
///   "nodes": [{"name": "A", "attrs": {"color": "red"}}, {"name": "B"}],
///   "edges": [{"left": "A", "right": "B", "is_oriented": true, "attrs": {"weight": 7}}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl GraphDescription {
    /// Parses a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a JSON description from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Builds a [`Graph`] from named nodes and name-addressed edges.
///
/// The builder handles the two-pass process:
/// 1. Add all nodes to the graph
/// 2. Resolve edge endpoint names into the stored nodes
pub struct GraphBuilder {
    graph: Graph,
    pending_edges: Vec<EdgeDescription>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            pending_edges: Vec::new(),
        }
    }

    /// Seeds a builder with every node and edge of a description.
    pub fn from_description(description: GraphDescription) -> Self {
        let mut builder = Self::new();
        for node in description.nodes {
            builder.add_node(node.name, node.attrs);
        }
        for edge in description.edges {
            builder.add_edge(edge);
        }
        builder
    }

    /// Adds a node. Returns false if the name was already taken.
    pub fn add_node(&mut self, name: impl Into<String>, attrs: Attributes) -> bool {
        self.graph.add_node(NodeSpec::new(name, attrs))
    }

    /// Queues an edge. Endpoints are resolved by [`GraphBuilder::build`].
    pub fn add_edge(&mut self, edge: EdgeDescription) {
        self.pending_edges.push(edge);
    }

    /// Resolves queued edges into the graph.
    ///
    /// An endpoint name with no matching node still yields an edge, to a
    /// bare node of that name. Such an edge will make matrix derivation fail.
    pub fn resolve_edges(&mut self) {
        let pending = std::mem::take(&mut self.pending_edges);
        let mut unresolved = 0usize;

        for description in pending {
            let left = self.resolve(&description.left, &mut unresolved);
            let right = self.resolve(&description.right, &mut unresolved);

            let mut builder = Edge::builder(left, right)
                .oriented(description.is_oriented)
                .attrs(description.attrs);
            if let Some(alias) = description.alias {
                builder = builder.alias(alias);
            }
            self.graph.add_edge(builder.build());
        }

        debug!(
            "Resolved edges: {} total, {} unresolved endpoints",
            self.graph.edge_count(),
            unresolved
        );
    }

    fn resolve(&self, name: &str, unresolved: &mut usize) -> Node {
        match self.graph.node(name) {
            Some(node) => node.clone(),
            None => {
                warn!("Edge endpoint \"{}\" is not a node of the graph", name);
                *unresolved += 1;
                Node::new(name)
            }
        }
    }

    /// Finishes building and returns the graph.
    pub fn build(mut self) -> Graph {
        self.resolve_edges();
        self.graph
    }
}

impl Graph {
    /// Builds a graph from a JSON description file.
    pub fn from_description_path(path: impl AsRef<Path>) -> Result<Self> {
        let description = GraphDescription::from_path(path)?;
        Ok(GraphBuilder::from_description(description).build())
    }
}
