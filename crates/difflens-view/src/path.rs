//! Stable string addresses for diff tree nodes.

use std::fmt;

use difflens_types::NodeKey;
use serde::{Deserialize, Serialize};

/// The sentinel path of the tree root.
const ROOT: &str = "$";

/// The address of a node: the chain of keys from the root rendered as one
/// string, used as the sole key for expansion state.
///
/// The root is `$`; a sequence member appends `[i]`; a mapping member
/// appends `.` followed by the field name with `\`, `.` and `[`
/// backslash-escaped. The escaping keeps the join collision-free: an
/// unescaped `.` or `[` only ever introduces a new segment, so two
/// distinct keys can never render the same text under the same ancestor,
/// and integer keys never collide with string keys that look like them.
///
/// Paths are recomputed during traversal rather than cached on nodes, and
/// are identical across independent walks of the same tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreePath(String);

impl TreePath {
    /// The root path.
    pub fn root() -> Self {
        TreePath(ROOT.to_string())
    }

    /// The path of a child of `self` at `key`.
    pub fn child(&self, key: &NodeKey) -> Self {
        match key {
            NodeKey::Root => TreePath::root(),
            NodeKey::Index(index) => TreePath(format!("{}[{index}]", self.0)),
            NodeKey::Field(name) => {
                let mut path = String::with_capacity(self.0.len() + name.len() + 1);
                path.push_str(&self.0);
                path.push('.');
                for c in name.chars() {
                    if matches!(c, '\\' | '.' | '[') {
                        path.push('\\');
                    }
                    path.push(c);
                }
                TreePath(path)
            }
        }
    }

    /// The rendered address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
