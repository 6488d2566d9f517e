//! Graph vertices.

use crate::entity::{Attributed, Attributes};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// A vertex in the graph.
///
/// Nodes compare and hash by name only, so a `HashSet<Node>` holds at
/// most one node per name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique name of the node.
    pub name: String,

    /// Attributes of the node.
    #[serde(default)]
    pub attrs: Attributes,
}

impl Node {
    /// Creates a node with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::new(),
        }
    }

    /// Creates a node with the given attributes.
    pub fn with_attrs(name: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            name: name.into(),
            attrs,
        }
    }

    /// Adds one attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

impl Attributed for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_attrs() {
        let plain = Node::new("A");
        let colored = Node::new("A").with_attr("color", "red");

        assert_eq!(plain, colored);
        assert_ne!(Node::new("A"), Node::new("B"));
    }

    #[test]
    fn test_set_keeps_first_by_name() {
        let mut set = HashSet::new();
        assert!(set.insert(Node::new("A").with_attr("rank", 1)));
        assert!(!set.insert(Node::new("A").with_attr("rank", 2)));

        let stored = set.iter().next().unwrap();
        assert_eq!(stored.attr("rank"), Some(&Value::from(1)));
    }

    #[test]
    fn test_display() {
        let node = Node::new("A").with_attr("color", "red");
        assert_eq!(node.to_string(), r#"A {color: "red"}"#);
    }

    #[test]
    fn test_deserialize_without_attrs() {
        let node: Node = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(node.name, "A");
        assert!(node.attrs.is_empty());
    }
}
