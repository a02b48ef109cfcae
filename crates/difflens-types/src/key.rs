//! Sibling keys for diff tree nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The key a node occupies among its siblings.
///
/// Sequence members are keyed by numeric index, mapping members by field
/// name, and the tree root by the `Root` marker. Integer and string keys
/// stay distinct through path rendering, so `Index(0)` and `Field("0")`
/// never address the same node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKey {
    /// The root of the diff tree.
    Root,
    /// A sequence member at this index.
    Index(usize),
    /// A mapping member under this field name.
    Field(String),
}

impl NodeKey {
    /// A field key.
    pub fn field(name: impl Into<String>) -> Self {
        NodeKey::Field(name.into())
    }

    /// An index key.
    pub fn index(index: usize) -> Self {
        NodeKey::Index(index)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Root => write!(f, "$"),
            NodeKey::Index(index) => write!(f, "{index}"),
            NodeKey::Field(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(NodeKey::Root.to_string(), "$");
        assert_eq!(NodeKey::index(3).to_string(), "3");
        assert_eq!(NodeKey::field("name").to_string(), "name");
    }

    #[test]
    fn index_and_field_keys_are_distinct() {
        assert_ne!(NodeKey::index(0), NodeKey::field("0"));
    }
}
