//! Bulk node insertion.
//!
//! One entry point per input shape. Each returns how many nodes were
//! actually inserted; names already present are skipped like in
//! [`Graph::add_node`].

use crate::graph::{Graph, NodeSpec};
use nodal_core::Attributes;

impl Graph {
    /// Adds every node of a sequence.
    ///
    /// Nodes built by the caller are inserted as-is. Fresh nodes start from
    /// a copy of `attributes`, overridden by their own attributes.
    pub fn add_nodes_from_sequence<I, S>(&mut self, nodes: I, attributes: Option<&Attributes>) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeSpec>,
    {
        let mut inserted = 0;
        for spec in nodes {
            if self.add_node(with_shared(spec.into(), attributes)) {
                inserted += 1;
            }
        }
        inserted
    }

    /// Adds `count` nodes named `"0"` to `"{count - 1}"`.
    pub fn add_nodes_from_count(&mut self, count: usize, attributes: Option<&Attributes>) -> usize {
        self.add_nodes_from_sequence(0..count, attributes)
    }

    /// Adds one node per character of `chars`.
    pub fn add_nodes_from_chars(&mut self, chars: &str, attributes: Option<&Attributes>) -> usize {
        self.add_nodes_from_sequence(chars.chars().map(String::from), attributes)
    }

    /// Adds one node per entry, each with its own attributes.
    pub fn add_nodes_from_mapping<I, K>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = (K, Attributes)>,
        K: Into<String>,
    {
        self.add_nodes_from_sequence(
            nodes
                .into_iter()
                .map(|(name, attrs)| NodeSpec::new(name, attrs)),
            None,
        )
    }
}

fn with_shared(spec: NodeSpec, shared: Option<&Attributes>) -> NodeSpec {
    match (spec, shared) {
        (NodeSpec::New { name, attrs }, Some(shared)) => {
            let mut merged = shared.clone();
            merged.extend(attrs);
            NodeSpec::New {
                name,
                attrs: merged,
            }
        }
        (spec, _) => spec,
    }
}
