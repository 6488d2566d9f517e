//! The attributed-entity capability shared by nodes and edges.
//!
//! Every graph element carries a name and an open-ended attribute map.
//! Identity is the name alone: two elements with the same name are the
//! same element, whatever their attributes say. Both `Node` and `Edge`
//! route their `PartialEq` and `Hash` impls through [`Attributed::identity_key`]
//! so the two can never disagree.

use crate::error::{CoreError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Attribute map carried by nodes and edges.
///
/// Ordered by key so renderings are reproducible.
pub type Attributes = BTreeMap<String, Value>;

/// A named element with attributes.
pub trait Attributed {
    /// The element's name.
    fn name(&self) -> &str;

    /// The element's attributes.
    fn attrs(&self) -> &Attributes;

    /// The key used for equality and hashing.
    fn identity_key(&self) -> &str {
        self.name()
    }

    /// Looks up a single attribute.
    fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs().get(key)
    }

    /// Looks up a single attribute, failing if it is absent.
    fn require_attr(&self, key: &str) -> Result<&Value> {
        self.attr(key).ok_or_else(|| CoreError::KeyMissing {
            entity: self.name().to_string(),
            key: key.to_string(),
        })
    }

    /// Checks whether an attribute is present.
    fn has_attr(&self, key: &str) -> bool {
        self.attrs().contains_key(key)
    }

    /// Renders the element as `name {key: value, ...}`.
    fn render(&self) -> String {
        render_entity(self.name(), self.attrs())
    }
}

/// Renders a name and attribute map in the shared display format.
pub fn render_entity(name: &str, attrs: &Attributes) -> String {
    let mut out = String::with_capacity(name.len() + 2 + attrs.len() * 16);
    out.push_str(name);
    out.push_str(" {");
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String never fails.
        let _ = write!(out, "{}: {}", key, value);
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Probe {
        name: String,
        attrs: Attributes,
    }

    impl Attributed for Probe {
        fn name(&self) -> &str {
            &self.name
        }

        fn attrs(&self) -> &Attributes {
            &self.attrs
        }
    }

    fn probe() -> Probe {
        let mut attrs = Attributes::new();
        attrs.insert("weight".to_string(), json!(7));
        attrs.insert("color".to_string(), json!("red"));
        Probe {
            name: "p".to_string(),
            attrs,
        }
    }

    #[test]
    fn test_render_sorts_keys() {
        assert_eq!(probe().render(), r#"p {color: "red", weight: 7}"#);
    }

    #[test]
    fn test_render_empty_attrs() {
        assert_eq!(render_entity("solo", &Attributes::new()), "solo {}");
    }

    #[test]
    fn test_require_attr() {
        let p = probe();
        assert_eq!(p.require_attr("weight").unwrap(), &json!(7));
        assert_eq!(
            p.require_attr("missing"),
            Err(CoreError::KeyMissing {
                entity: "p".to_string(),
                key: "missing".to_string(),
            })
        );
        assert!(p.has_attr("color"));
        assert_eq!(p.identity_key(), "p");
    }
}
