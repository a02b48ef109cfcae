//! The "show only changed" child filter.

use difflens_diff::DiffNode;

/// The subset of `children` a renderer should display.
///
/// Identity pass-through when `only_changed` is false; otherwise the
/// order-preserving subsequence of children that contain a difference.
///
/// Applied independently at every container level: an ancestor that
/// differs is displayed by its own parent's filtering regardless of
/// whether its filtered children come out empty. A bulk-added container is
/// the canonical case — its synthesized descendants are all unchanged and
/// vanish under the filter, while the container itself still shows as
/// added. Callers must not prune such a container just because this
/// returns nothing, and must not memoize results across flag changes.
pub fn visible_children(children: &[DiffNode], only_changed: bool) -> Vec<&DiffNode> {
    if only_changed {
        children.iter().filter(|c| c.has_difference()).collect()
    } else {
        children.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use difflens_diff::diff_values;
    use difflens_types::NodeKey;
    use serde_json::json;

    #[test]
    fn pass_through_when_filter_is_off() {
        let tree = diff_values(&json!({ "a": 1, "b": 2 }), &json!({ "a": 1, "b": 3 }));
        let visible = visible_children(&tree.children, false);
        assert_eq!(visible.len(), tree.children.len());
    }

    #[test]
    fn keeps_only_differing_children_in_order() {
        let left = json!({ "a": 1, "b": 2, "c": 3, "d": 4 });
        let right = json!({ "a": 1, "b": 9, "c": 3, "e": 5 });
        let tree = diff_values(&left, &right);

        let visible = visible_children(&tree.children, true);
        let keys: Vec<String> = visible.iter().map(|c| c.key.to_string()).collect();
        assert_eq!(keys, vec!["b", "d", "e"]);
    }

    #[test]
    fn differing_container_stays_visible_when_its_own_filter_empties() {
        // An added container's synthesized children are all unchanged; the
        // container must still be visible in its parent's filtered list.
        let tree = diff_values(&json!({}), &json!({ "bulk": { "x": 1, "y": 2 } }));

        let at_parent = visible_children(&tree.children, true);
        assert_eq!(at_parent.len(), 1);
        assert_eq!(at_parent[0].key, NodeKey::field("bulk"));

        let inside = visible_children(&at_parent[0].children, true);
        assert!(inside.is_empty());
    }
}
