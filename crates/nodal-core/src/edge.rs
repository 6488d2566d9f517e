//! Edge types for the graph.
//!
//! An edge links exactly two nodes. Its name is derived from the endpoint
//! names and the orientation, and that derived name is the edge's identity:
//! two edges with the same endpoints and orientation are the same edge.

use crate::entity::{Attributed, Attributes};
use crate::node::Node;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// Whether an edge carries a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Left links to right.
    Oriented,

    /// Left and right are related, with no direction.
    Unoriented,
}

impl Relation {
    /// Relation for an edge's orientation flag.
    pub fn from_oriented(is_oriented: bool) -> Self {
        if is_oriented {
            Self::Oriented
        } else {
            Self::Unoriented
        }
    }

    /// Separator placed between endpoint names in the edge's name.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Oriented => " -> ",
            Self::Unoriented => " == ",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Oriented => "oriented",
            Self::Unoriented => "unoriented",
        };
        write!(f, "{}", s)
    }
}

/// A link between two nodes.
///
/// Endpoint order is kept exactly as given. Self-loops are allowed, and the
/// endpoints need not belong to any graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "EdgeParts")]
pub struct Edge {
    nodes: (Node, Node),
    alias: Option<String>,
    is_oriented: bool,
    name: String,
    attrs: Attributes,
}

impl Edge {
    /// Creates an unoriented edge with no alias and no attributes.
    pub fn new(left: Node, right: Node) -> Self {
        Self::builder(left, right).build()
    }

    /// Starts building an edge between `left` and `right`.
    pub fn builder(left: Node, right: Node) -> EdgeBuilder {
        EdgeBuilder {
            left,
            right,
            alias: None,
            is_oriented: false,
            attrs: Attributes::new(),
        }
    }

    /// Returns true if the edge is directed from left to right.
    pub fn is_orient(&self) -> bool {
        self.is_oriented
    }

    /// Orientation of the edge as a [`Relation`].
    pub fn relation(&self) -> Relation {
        Relation::from_oriented(self.is_oriented)
    }

    /// The endpoints in construction order.
    pub fn nodes(&self) -> (&Node, &Node) {
        (&self.nodes.0, &self.nodes.1)
    }

    /// Left endpoint, the source when the edge is oriented.
    pub fn left(&self) -> &Node {
        &self.nodes.0
    }

    /// Right endpoint, the target when the edge is oriented.
    pub fn right(&self) -> &Node {
        &self.nodes.1
    }

    /// Display alias, if one was given.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns true if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.nodes.0 == self.nodes.1
    }
}

fn derive_name(left: &Node, right: &Node, relation: Relation) -> String {
    format!("{}{}{}", left.name, relation.separator(), right.name)
}

impl Attributed for Edge {
    fn name(&self) -> &str {
        &self.name
    }

    fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{}\n{}", alias, self.render()),
            None => f.write_str(&self.render()),
        }
    }
}

/// Builder for [`Edge`].
#[derive(Debug, Clone)]
pub struct EdgeBuilder {
    left: Node,
    right: Node,
    alias: Option<String>,
    is_oriented: bool,
    attrs: Attributes,
}

impl EdgeBuilder {
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn oriented(mut self, is_oriented: bool) -> Self {
        self.is_oriented = is_oriented;
        self
    }

    /// Replaces the attribute map.
    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Adds one attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Edge {
        let name = derive_name(
            &self.left,
            &self.right,
            Relation::from_oriented(self.is_oriented),
        );
        Edge {
            nodes: (self.left, self.right),
            alias: self.alias,
            is_oriented: self.is_oriented,
            name,
            attrs: self.attrs,
        }
    }
}

/// Wire shape of an edge. The name is always re-derived on load.
#[derive(Deserialize)]
struct EdgeParts {
    nodes: (Node, Node),
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    is_oriented: bool,
    #[serde(default)]
    attrs: Attributes,
}

impl From<EdgeParts> for Edge {
    fn from(parts: EdgeParts) -> Self {
        let (left, right) = parts.nodes;
        let mut builder = Edge::builder(left, right)
            .oriented(parts.is_oriented)
            .attrs(parts.attrs);
        if let Some(alias) = parts.alias {
            builder = builder.alias(alias);
        }
        builder.build()
    }
}
