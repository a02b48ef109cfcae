//! Change classification vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The change classification carried by every diff tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Both sides are present and equal, or no descendant differs.
    Unchanged,
    /// The key exists only on the right side.
    Added,
    /// The key exists only on the left side.
    Removed,
    /// Both sides are present, same kind, but not equal (directly for
    /// scalars, via a differing descendant for containers).
    Modified,
    /// Both sides are present but their runtime kinds differ.
    TypeChanged,
}

impl ChangeKind {
    /// Returns `true` for every classification except `Unchanged`.
    pub fn is_difference(&self) -> bool {
        !matches!(self, ChangeKind::Unchanged)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Unchanged => "unchanged",
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
            ChangeKind::TypeChanged => "type_changed",
        };
        write!(f, "{label}")
    }
}

/// Which flavor of container a node represents, when it is a container on
/// at least one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// The node is a scalar on both sides.
    #[default]
    None,
    Sequence,
    Mapping,
}

impl ContainerKind {
    /// The container kind of a single value (`None` for scalars and null).
    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::Array(_) => ContainerKind::Sequence,
            Value::Object(_) => ContainerKind::Mapping,
            _ => ContainerKind::None,
        }
    }

    /// Returns `true` for sequences and mappings.
    pub fn is_container(&self) -> bool {
        !matches!(self, ContainerKind::None)
    }

    /// Returns `true` for `ContainerKind::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ContainerKind::None)
    }
}

/// The side of a comparison a value came from.
///
/// Used when materializing one-sided subtrees for added/removed containers:
/// the subtree's values are populated only on this side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
