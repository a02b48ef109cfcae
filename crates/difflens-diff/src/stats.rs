//! Per-classification node counts over a diff tree.

use difflens_types::ChangeKind;
use serde::{Deserialize, Serialize};

use crate::node::DiffNode;

/// Counts of differing nodes by classification.
///
/// Unchanged nodes are traversed but never counted, so a tree with no
/// differences produces an empty stats value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub type_changed: usize,
}

impl DiffStats {
    /// Total number of differing nodes.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.type_changed
    }

    /// Returns `true` if no node differs.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn record(&mut self, change: ChangeKind) {
        match change {
            ChangeKind::Unchanged => {}
            ChangeKind::Added => self.added += 1,
            ChangeKind::Removed => self.removed += 1,
            ChangeKind::Modified => self.modified += 1,
            ChangeKind::TypeChanged => self.type_changed += 1,
        }
    }
}

/// Count every differing node reachable from `tree`, in a full pre-order
/// traversal on an explicit stack.
///
/// Synthesized one-sided descendants are visited too; they are unchanged
/// and contribute nothing, but the traversal must not skip them.
pub fn collect_stats(tree: &DiffNode) -> DiffStats {
    let mut stats = DiffStats::default();
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        stats.record(node.change);
        stack.extend(node.children.iter().rev());
    }
    stats
}
