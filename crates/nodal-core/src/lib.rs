//! Nodal Core - Attributed graph elements
//!
//! This crate defines the building blocks of a Nodal graph: named nodes
//! and the edges between them, both carrying free-form attributes.
//!
//! Elements are identified by name. A node's name is whatever the caller
//! gives it; an edge's name is derived from its endpoints, joined by
//! `" -> "` for oriented edges and `" == "` otherwise.
//!
//! # Example
//!
//! ```
//! use nodal_core::{Attributed, Edge, Node};
//!
//! let a = Node::new("A").with_attr("color", "red");
//! let b = Node::new("B");
//!
//! let edge = Edge::builder(a, b).oriented(true).attr("weight", 7).build();
//! assert_eq!(edge.name(), "A -> B");
//! ```

mod edge;
mod entity;
mod error;
mod node;

pub use edge::{Edge, EdgeBuilder, Relation};
pub use entity::{render_entity, Attributed, Attributes};
pub use error::{CoreError, Result};
pub use node::Node;
pub use serde_json::Value;
