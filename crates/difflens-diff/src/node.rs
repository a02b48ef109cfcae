//! The annotated diff tree node.

use difflens_types::{ChangeKind, ContainerKind, NodeKey, Side};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of the tree produced by [`diff_values`](crate::diff_values).
///
/// A node carries the original value from each side (`None` when the key
/// does not exist on that side, which is distinct from a JSON `null`), a
/// change classification, and ordered children when it is a container on at
/// least one side. The tree is immutable once built; a new input pair
/// produces a whole new tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffNode {
    /// The key this node occupies among its siblings.
    pub key: NodeKey,
    /// The change classification.
    pub change: ChangeKind,
    /// The left-side value; `None` when the key is absent there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Value>,
    /// The right-side value; `None` when the key is absent there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Value>,
    /// Container flavor when this node is a container on at least one side.
    #[serde(default, skip_serializing_if = "ContainerKind::is_none")]
    pub container: ContainerKind,
    /// Ordered children; always empty for scalar nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DiffNode>,
}

impl DiffNode {
    /// Returns `true` iff the classification is anything but `Unchanged`.
    ///
    /// Derived from [`DiffNode::change`] rather than stored, so the two can
    /// never disagree.
    pub fn has_difference(&self) -> bool {
        self.change.is_difference()
    }

    /// Returns `true` when the node is a container on at least one side.
    pub fn is_container(&self) -> bool {
        self.container.is_container()
    }

    /// The value on the given side, if the key exists there.
    pub fn value(&self, side: Side) -> Option<&Value> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// The child with the given key, if any.
    pub fn child(&self, key: &NodeKey) -> Option<&DiffNode> {
        self.children.iter().find(|c| &c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(change: ChangeKind) -> DiffNode {
        DiffNode {
            key: NodeKey::Root,
            change,
            left: Some(json!(1)),
            right: Some(json!(1)),
            container: ContainerKind::None,
            children: Vec::new(),
        }
    }

    #[test]
    fn has_difference_follows_classification() {
        assert!(!leaf(ChangeKind::Unchanged).has_difference());
        assert!(leaf(ChangeKind::Modified).has_difference());
        assert!(leaf(ChangeKind::TypeChanged).has_difference());
    }

    #[test]
    fn absent_sides_are_omitted_from_serialization() {
        let node = DiffNode {
            key: NodeKey::field("b"),
            change: ChangeKind::Added,
            left: None,
            right: Some(json!(2)),
            container: ContainerKind::None,
            children: Vec::new(),
        };
        let encoded = serde_json::to_value(&node).unwrap();
        assert!(encoded.get("left").is_none());
        assert_eq!(encoded["right"], json!(2));
        assert!(encoded.get("children").is_none());
        assert_eq!(encoded["change"], json!("added"));
    }

    #[test]
    fn value_accessor_respects_sides() {
        let node = DiffNode {
            key: NodeKey::Root,
            change: ChangeKind::Removed,
            left: Some(json!("gone")),
            right: None,
            container: ContainerKind::None,
            children: Vec::new(),
        };
        assert_eq!(node.value(Side::Left), Some(&json!("gone")));
        assert_eq!(node.value(Side::Right), None);
    }
}
