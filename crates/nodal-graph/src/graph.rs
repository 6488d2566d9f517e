//! Core graph data structure.
//!
//! A `Graph` is two sets: nodes keyed by name, and edges keyed by their
//! derived name. Inserting an element whose name is already taken is a
//! silent no-op; the stored element is kept as it was.

use nodal_core::{Attributed, Attributes, Edge, Node, Relation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// What to insert with [`Graph::add_node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeSpec {
    /// A node built by the caller, inserted as-is.
    Existing(Node),

    /// A name and attributes for a fresh node.
    New { name: String, attrs: Attributes },
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, attrs: Attributes) -> Self {
        Self::New {
            name: name.into(),
            attrs,
        }
    }

    /// A fresh node with no attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Attributes::new())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Existing(node) => &node.name,
            Self::New { name, .. } => name,
        }
    }

    pub fn into_node(self) -> Node {
        match self {
            Self::Existing(node) => node,
            Self::New { name, attrs } => Node::with_attrs(name, attrs),
        }
    }
}

impl From<Node> for NodeSpec {
    fn from(node: Node) -> Self {
        Self::Existing(node)
    }
}

impl From<&str> for NodeSpec {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for NodeSpec {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<usize> for NodeSpec {
    fn from(index: usize) -> Self {
        Self::named(index.to_string())
    }
}

/// What to look for with [`Graph::node_exists`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeQuery<'a> {
    /// Set membership of a node (by its name identity).
    Node(&'a Node),

    /// Whether any stored node carries this name.
    Name(&'a str),
}

impl<'a> From<&'a Node> for NodeQuery<'a> {
    fn from(node: &'a Node) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<&'a str> for NodeQuery<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for NodeQuery<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

/// An unordered collection of unique nodes and edges.
///
/// Edges are not required to connect nodes of the same graph. Such edges
/// are accepted, and surface as [`crate::GraphError::OutOfRange`] when the
/// adjacency matrix is derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: HashSet<Node>,
    edges: HashSet<Edge>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a node is present.
    ///
    /// A `Node` query is a set lookup. A `Name` query scans the stored
    /// nodes for one with that name.
    pub fn node_exists<'a>(&self, query: impl Into<NodeQuery<'a>>) -> bool {
        match query.into() {
            NodeQuery::Node(node) => self.nodes.contains(node),
            NodeQuery::Name(name) => self.nodes.iter().any(|node| node.name == name),
        }
    }

    /// Adds a node to the graph.
    ///
    /// Returns false if a node with the same name was already present, in
    /// which case the stored node and its attributes are left untouched.
    pub fn add_node(&mut self, spec: impl Into<NodeSpec>) -> bool {
        let node = spec.into().into_node();
        let name = node.name.clone();
        let inserted = self.nodes.insert(node);
        if !inserted {
            debug!("Ignoring duplicate node {}", name);
        }
        inserted
    }

    /// Adds an edge to the graph.
    ///
    /// Returns false if an edge with the same derived name was already present.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        let name = edge.name().to_string();
        let inserted = self.edges.insert(edge);
        if !inserted {
            debug!("Ignoring duplicate edge {}", name);
        }
        inserted
    }

    /// Gets a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Gets an edge by its derived name (e.g. `"A -> B"`).
    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.name() == name)
    }

    /// All nodes, sorted by name.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes
    }

    /// All edges, sorted by derived name.
    pub fn edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.iter().collect();
        edges.sort_by(|a, b| a.name().cmp(b.name()));
        edges
    }

    /// Node names in lexicographic order.
    pub fn node_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.iter().map(|node| node.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Renders the graph as lists of its edges and nodes.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "_______________Graph_______________")?;
        writeln!(
            f,
            "Graph(nodes={}, edges={})",
            self.node_count(),
            self.edge_count()
        )?;
        writeln!(f, "_______________Edges_______________")?;
        for edge in self.edges() {
            writeln!(f, "{}", edge)?;
        }
        writeln!(f, "_______________Nodes_______________")?;
        let nodes = self.nodes();
        for (i, node) in nodes.iter().enumerate() {
            if i + 1 < nodes.len() {
                writeln!(f, "{}", node)?;
            } else {
                write!(f, "{}", node)?;
            }
        }
        Ok(())
    }
}

/// Graph statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub oriented_edges: usize,
    pub self_loops: usize,
}

impl Graph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            oriented_edges: self
                .edges
                .iter()
                .filter(|edge| edge.relation() == Relation::Oriented)
                .count(),
            self_loops: self.edges.iter().filter(|edge| edge.is_self_loop()).count(),
        }
    }
}
