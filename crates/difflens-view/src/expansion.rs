//! Expansion state for container nodes, keyed by path.

use std::collections::HashMap;

use difflens_diff::DiffNode;

use crate::path::TreePath;
use crate::walk::walk;

/// A mapping from node path to expanded/collapsed, where a missing entry
/// means "expanded".
///
/// The store is owned by exactly one viewer and mutated through `&mut self`;
/// embeddings with multiple consumers must serialize access themselves. It
/// is reset and reseeded every time a new diff tree is computed, and is
/// otherwise touched only by the operations below — lookups after seeding
/// are literal, with no policy applied.
#[derive(Clone, Debug, Default)]
pub struct ExpansionState {
    entries: HashMap<TreePath, bool>,
}

impl ExpansionState {
    /// Create an empty store (everything implicitly expanded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the store for a freshly computed tree: every container with no
    /// difference anywhere beneath it starts collapsed; containers that do
    /// differ keep the implicit expanded default.
    pub fn reseed(&mut self, tree: &DiffNode) {
        self.entries.clear();
        let entries = &mut self.entries;
        walk(tree, |path, node| {
            if node.is_container() && !node.has_difference() {
                entries.insert(path.clone(), false);
            }
        });
    }

    /// Whether the node at `path` is expanded. Absent means `true`.
    pub fn is_expanded(&self, path: &TreePath) -> bool {
        self.entries.get(path).copied().unwrap_or(true)
    }

    /// Flip the state at `path`, treating an absent entry as expanded.
    pub fn toggle(&mut self, path: &TreePath) {
        let flipped = !self.is_expanded(path);
        self.entries.insert(path.clone(), flipped);
    }

    /// Collapse every container in `tree`.
    pub fn collapse_all(&mut self, tree: &DiffNode) {
        let entries = &mut self.entries;
        walk(tree, |path, node| {
            if node.is_container() {
                entries.insert(path.clone(), false);
            }
        });
    }

    /// Drop every stored entry, reverting all containers to the implicit
    /// expanded default.
    pub fn expand_all(&mut self) {
        self.entries.clear();
    }

    /// Number of explicitly stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is explicitly stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use difflens_diff::diff_values;
    use difflens_types::NodeKey;
    use serde_json::json;

    fn path(segments: &[NodeKey]) -> TreePath {
        segments
            .iter()
            .fold(TreePath::root(), |p, key| p.child(key))
    }

    #[test]
    fn seed_collapses_only_unchanged_containers() {
        let left = json!({ "same": { "a": 1 }, "edit": { "b": 1 } });
        let right = json!({ "same": { "a": 1 }, "edit": { "b": 2 } });
        let tree = diff_values(&left, &right);

        let mut state = ExpansionState::new();
        state.reseed(&tree);

        // "same" has no difference: explicitly collapsed.
        assert!(!state.is_expanded(&path(&[NodeKey::field("same")])));
        // "edit" differs: implicitly expanded, no entry stored.
        assert!(state.is_expanded(&path(&[NodeKey::field("edit")])));
        // The root differs: expanded as well.
        assert!(state.is_expanded(&TreePath::root()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn lookups_after_seeding_are_literal() {
        let doc = json!({ "box": { "a": 1 } });
        let tree = diff_values(&doc, &doc);
        let mut state = ExpansionState::new();
        state.reseed(&tree);

        let box_path = path(&[NodeKey::field("box")]);
        assert!(!state.is_expanded(&box_path));

        // Toggling stores the literal flip; nothing reapplies the policy.
        state.toggle(&box_path);
        assert!(state.is_expanded(&box_path));
        state.toggle(&box_path);
        assert!(!state.is_expanded(&box_path));
    }

    #[test]
    fn toggle_treats_absent_as_expanded() {
        let mut state = ExpansionState::new();
        let p = path(&[NodeKey::field("anywhere")]);
        assert!(state.is_expanded(&p));
        state.toggle(&p);
        assert!(!state.is_expanded(&p));
    }

    #[test]
    fn collapse_then_expand_round_trip() {
        let left = json!({ "a": { "b": [1, 2] }, "c": [true] });
        let right = json!({ "a": { "b": [1, 3] }, "c": [true] });
        let tree = diff_values(&left, &right);

        let mut state = ExpansionState::new();
        state.reseed(&tree);

        state.collapse_all(&tree);
        let mut container_paths = Vec::new();
        walk(&tree, |p, node| {
            if node.is_container() {
                container_paths.push(p.clone());
            }
        });
        for p in &container_paths {
            assert!(!state.is_expanded(p), "{p} should be collapsed");
        }

        state.expand_all();
        assert!(state.is_empty());
        for p in &container_paths {
            assert!(state.is_expanded(p), "{p} should revert to expanded");
        }
    }

    #[test]
    fn reseed_discards_previous_toggles() {
        let doc = json!({ "box": { "a": 1 } });
        let tree = diff_values(&doc, &doc);
        let mut state = ExpansionState::new();
        state.reseed(&tree);

        let box_path = path(&[NodeKey::field("box")]);
        state.toggle(&box_path);
        assert!(state.is_expanded(&box_path));

        // A recompute reseeds from scratch; the manual toggle is gone.
        state.reseed(&tree);
        assert!(!state.is_expanded(&box_path));
    }
}
