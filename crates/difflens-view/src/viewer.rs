//! The stateful diff viewing session.

use difflens_diff::{collect_stats, diff_values, DiffNode, DiffStats};
use serde_json::Value;
use tracing::debug;

use crate::expansion::ExpansionState;
use crate::filter::visible_children;
use crate::path::TreePath;

/// A diff session: the immutable tree for the current input pair, its
/// stats, and the mutable view state on top of it.
///
/// Recomputing for a new input pair replaces the tree and fully reseeds the
/// expansion store in one step; there are no partial updates. The "only
/// changed" flag is view preference, not tree state, and survives
/// recomputes.
#[derive(Clone, Debug)]
pub struct DiffViewer {
    tree: DiffNode,
    stats: DiffStats,
    expansion: ExpansionState,
    only_changed: bool,
}

impl DiffViewer {
    /// Diff the two inputs and seed the view state.
    pub fn new(left: &Value, right: &Value) -> Self {
        let (tree, stats, expansion) = compute(left, right);
        DiffViewer {
            tree,
            stats,
            expansion,
            only_changed: false,
        }
    }

    /// Replace the inputs: recompute the tree and stats and reseed the
    /// expansion store atomically. Earlier toggles do not survive.
    pub fn set_inputs(&mut self, left: &Value, right: &Value) {
        let (tree, stats, expansion) = compute(left, right);
        self.tree = tree;
        self.stats = stats;
        self.expansion = expansion;
    }

    /// The current diff tree, read-only.
    pub fn tree(&self) -> &DiffNode {
        &self.tree
    }

    /// Counts of differing nodes in the current tree.
    pub fn stats(&self) -> &DiffStats {
        &self.stats
    }

    /// Whether the container at `path` is currently expanded.
    pub fn is_expanded(&self, path: &TreePath) -> bool {
        self.expansion.is_expanded(path)
    }

    /// Flip the expansion state at `path`.
    pub fn toggle(&mut self, path: &TreePath) {
        self.expansion.toggle(path);
    }

    /// Collapse every container in the current tree.
    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all(&self.tree);
    }

    /// Expand every container.
    pub fn expand_all(&mut self) {
        self.expansion.expand_all();
    }

    /// The "show only changed" flag.
    pub fn only_changed(&self) -> bool {
        self.only_changed
    }

    /// Set the "show only changed" flag.
    pub fn set_only_changed(&mut self, only_changed: bool) {
        self.only_changed = only_changed;
    }

    /// The children of `node` that should be displayed under the current
    /// filter flag. Evaluated fresh on every call.
    pub fn visible_children<'a>(&self, node: &'a DiffNode) -> Vec<&'a DiffNode> {
        visible_children(&node.children, self.only_changed)
    }
}

fn compute(left: &Value, right: &Value) -> (DiffNode, DiffStats, ExpansionState) {
    let tree = diff_values(left, right);
    let stats = collect_stats(&tree);
    let mut expansion = ExpansionState::new();
    expansion.reseed(&tree);
    debug!(
        added = stats.added,
        removed = stats.removed,
        modified = stats.modified,
        type_changed = stats.type_changed,
        seeded = expansion.len(),
        "diff tree recomputed"
    );
    (tree, stats, expansion)
}
