//! Text rendering of the annotated diff tree.
//!
//! A unified view: one line per visible node, a change marker in the left
//! column, scalar values colored by kind. Collapsed containers show a
//! preview count of their (filtered) children instead of their contents.

use std::fmt::Write;

use colored::{ColoredString, Colorize};
use difflens_diff::{DiffNode, DiffStats};
use difflens_types::{ChangeKind, ContainerKind, NodeKey, ScalarKind, ValueKind};
use difflens_view::{DiffViewer, TreePath};
use serde::Serialize;
use serde_json::Value;

/// Serialized report for `--format json`.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub stats: &'a DiffStats,
    pub tree: &'a DiffNode,
}

/// The one-line summary shown above the tree.
pub fn stats_line(stats: &DiffStats) -> String {
    format!(
        "{} added  {} removed  {} modified  {} type changed",
        stats.added.to_string().green().bold(),
        stats.removed.to_string().red().bold(),
        stats.modified.to_string().yellow().bold(),
        stats.type_changed.to_string().magenta().bold(),
    )
}

enum Item<'a> {
    Node {
        path: TreePath,
        node: &'a DiffNode,
        depth: usize,
    },
    Close {
        bracket: &'static str,
        depth: usize,
    },
}

/// Render the viewer's current tree, honoring its expansion state and
/// filter flag. Iterative, like every other full-tree walk here.
pub fn render_tree(viewer: &DiffViewer) -> String {
    let mut out = String::new();
    let mut stack = vec![Item::Node {
        path: TreePath::root(),
        node: viewer.tree(),
        depth: 0,
    }];

    while let Some(item) = stack.pop() {
        match item {
            Item::Close { bracket, depth } => {
                let _ = writeln!(out, "  {}{bracket}", "  ".repeat(depth));
            }
            Item::Node { path, node, depth } => {
                let indent = "  ".repeat(depth);
                let mark = marker(node.change);
                let label = match &node.key {
                    NodeKey::Root => String::new(),
                    key => format!("{}: ", key.to_string().bold()),
                };

                // Type-changed nodes render leafwise even when a container
                // is involved: their children are empty by contract.
                if node.is_container() && node.change != ChangeKind::TypeChanged {
                    let (open, close) = brackets(node.container);
                    let visible = viewer.visible_children(node);
                    if viewer.is_expanded(&path) {
                        let _ = writeln!(out, "{mark} {indent}{label}{open}");
                        stack.push(Item::Close {
                            bracket: close,
                            depth,
                        });
                        for child in visible.into_iter().rev() {
                            stack.push(Item::Node {
                                path: path.child(&child.key),
                                node: child,
                                depth: depth + 1,
                            });
                        }
                    } else {
                        let preview = format!("…{}", visible.len()).dimmed();
                        let _ = writeln!(out, "{mark} {indent}{label}{open} {preview} {close}");
                    }
                } else {
                    let _ = writeln!(out, "{mark} {indent}{label}{}", leaf_text(node));
                }
            }
        }
    }

    out
}

fn leaf_text(node: &DiffNode) -> String {
    match node.change {
        ChangeKind::Added => side_text(node.right.as_ref()).to_string(),
        ChangeKind::Removed => side_text(node.left.as_ref()).to_string(),
        ChangeKind::Modified | ChangeKind::TypeChanged => format!(
            "{} → {}",
            side_text(node.left.as_ref()),
            side_text(node.right.as_ref())
        ),
        // Unchanged leaves inside a one-sided branch carry a value on one
        // side only; either way there is a single value to show.
        ChangeKind::Unchanged => side_text(node.right.as_ref().or(node.left.as_ref())).to_string(),
    }
}

fn side_text(value: Option<&Value>) -> ColoredString {
    match value {
        Some(v) => value_text(v),
        None => "undefined".dimmed(),
    }
}

fn value_text(value: &Value) -> ColoredString {
    let text = value.to_string();
    match ValueKind::of(value) {
        ValueKind::Null => text.dimmed(),
        ValueKind::Scalar(ScalarKind::String) => text.yellow(),
        ValueKind::Scalar(ScalarKind::Number) => text.cyan(),
        ValueKind::Scalar(ScalarKind::Boolean) => text.magenta(),
        ValueKind::Sequence | ValueKind::Mapping => text.normal(),
    }
}

fn marker(change: ChangeKind) -> ColoredString {
    match change {
        ChangeKind::Unchanged => " ".normal(),
        ChangeKind::Added => "+".green().bold(),
        ChangeKind::Removed => "-".red().bold(),
        ChangeKind::Modified => "~".yellow().bold(),
        ChangeKind::TypeChanged => "!".magenta().bold(),
    }
}

fn brackets(kind: ContainerKind) -> (&'static str, &'static str) {
    match kind {
        ContainerKind::Sequence => ("[", "]"),
        ContainerKind::Mapping | ContainerKind::None => ("{", "}"),
    }
}
