//! Iterative pre-order traversal with per-node paths.

use difflens_diff::DiffNode;

use crate::path::TreePath;

/// Visit every node of `tree` in pre-order, with the node's address.
///
/// The traversal runs on an explicit stack, so tree depth is bounded by
/// heap only, and paths are computed fresh on every walk — the same tree
/// always yields the same addresses.
pub fn walk<'a, F>(tree: &'a DiffNode, mut visit: F)
where
    F: FnMut(&TreePath, &'a DiffNode),
{
    let mut stack = vec![(TreePath::root(), tree)];
    while let Some((path, node)) = stack.pop() {
        visit(&path, node);
        for child in node.children.iter().rev() {
            stack.push((path.child(&child.key), child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use difflens_diff::diff_values;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn visits_every_node_in_pre_order() {
        let tree = diff_values(
            &json!({ "a": [1, 2], "b": { "c": 3 } }),
            &json!({ "a": [1, 2], "b": { "c": 3 } }),
        );
        let mut paths = Vec::new();
        walk(&tree, |path, _| paths.push(path.to_string()));
        assert_eq!(
            paths,
            vec!["$", "$.a", "$.a[0]", "$.a[1]", "$.b", "$.b.c"]
        );
    }

    #[test]
    fn no_two_nodes_share_a_path() {
        // Includes keys chosen to collide under a naive dot join.
        let doc = json!({
            "a": { "b": 1 },
            "a.b": 2,
            "a[0]": 3,
            "list": [{ "a": 1 }, { "a": 1 }]
        });
        let tree = diff_values(&doc, &doc);

        let mut seen = HashSet::new();
        let mut count = 0usize;
        walk(&tree, |path, _| {
            count += 1;
            assert!(seen.insert(path.clone()), "duplicate path {path}");
        });
        assert_eq!(seen.len(), count);
    }

    #[test]
    fn synthesized_branches_are_walked_too() {
        let tree = diff_values(&json!({}), &json!({ "new": { "deep": [1] } }));
        let mut paths = Vec::new();
        walk(&tree, |path, _| paths.push(path.to_string()));
        assert!(paths.contains(&"$.new.deep[0]".to_string()));
    }
}
