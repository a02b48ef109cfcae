//! Structural diff over two JSON values.
//!
//! [`diff_values`] is total: it is defined for every pair of parsed JSON
//! values and always terminates with a classification. The traversal runs on
//! an explicit heap-allocated work stack rather than call recursion, so
//! pathologically nested inputs are bounded by available memory, not by the
//! thread stack.

use difflens_types::{ChangeKind, ContainerKind, NodeKey, Side, ValueKind};
use serde_json::Value;

use crate::node::DiffNode;

/// Compare two JSON values and produce the annotated diff tree.
///
/// Classification priority at every node:
///
/// 1. one-sided absence → `Added`/`Removed`, with the present side's
///    children materialized one-sided;
/// 2. two non-containers → `Unchanged`, `Modified`, or `TypeChanged` by
///    equality and kind;
/// 3. kind mismatch involving a container → `TypeChanged` with no children;
/// 4. same-shape containers → recurse, `Modified` iff any child differs.
///
/// Sequences pair children by numeric index (no content-similarity
/// matching), mappings by the union of keys in left-then-right order.
pub fn diff_values(left: &Value, right: &Value) -> DiffNode {
    let root = Task {
        key: NodeKey::Root,
        sides: Sides::Both(left, right),
        synthesized: false,
    };
    run(vec![root])
        .pop()
        .expect("the root task always yields exactly one node")
}

/// Materialize the members of a one-sided container as diff nodes.
///
/// Each member becomes a node whose value is populated only on `side`,
/// recursively, so an added or removed branch stays fully walkable. Every
/// synthesized node classifies as `Unchanged`: there is no opposite-side
/// value to compare against at that depth, and the added/removed ancestor
/// alone carries the difference.
pub fn synthesize_one_sided(value: &Value, side: Side) -> Vec<DiffNode> {
    run(member_tasks(value, side))
}

/// A pending comparison. At least one side is always present, which the
/// `Sides` variants encode directly.
struct Task<'a> {
    key: NodeKey,
    sides: Sides<'a>,
    /// True below an added/removed boundary, where nodes are materialized
    /// one-sided and stay unchanged.
    synthesized: bool,
}

enum Sides<'a> {
    Both(&'a Value, &'a Value),
    LeftOnly(&'a Value),
    RightOnly(&'a Value),
}

impl<'a> Sides<'a> {
    fn one(side: Side, value: &'a Value) -> Self {
        match side {
            Side::Left => Sides::LeftOnly(value),
            Side::Right => Sides::RightOnly(value),
        }
    }
}

enum Work<'a> {
    Visit(Task<'a>),
    /// Assemble a container node from the last `child_count` finished nodes.
    Finish {
        key: NodeKey,
        /// Fixed classification, or `None` to derive it from the children.
        change: Option<ChangeKind>,
        left: Option<&'a Value>,
        right: Option<&'a Value>,
        container: ContainerKind,
        child_count: usize,
    },
}

fn run(tasks: Vec<Task<'_>>) -> Vec<DiffNode> {
    let mut work: Vec<Work<'_>> = tasks.into_iter().rev().map(Work::Visit).collect();
    let mut done: Vec<DiffNode> = Vec::new();

    while let Some(item) = work.pop() {
        match item {
            Work::Visit(task) => visit(task, &mut work, &mut done),
            Work::Finish {
                key,
                change,
                left,
                right,
                container,
                child_count,
            } => {
                let children: Vec<DiffNode> = done.drain(done.len() - child_count..).collect();
                let change = change.unwrap_or_else(|| {
                    if children.iter().any(DiffNode::has_difference) {
                        ChangeKind::Modified
                    } else {
                        ChangeKind::Unchanged
                    }
                });
                done.push(DiffNode {
                    key,
                    change,
                    left: left.cloned(),
                    right: right.cloned(),
                    container,
                    children,
                });
            }
        }
    }

    done
}

fn visit<'a>(task: Task<'a>, work: &mut Vec<Work<'a>>, done: &mut Vec<DiffNode>) {
    let Task {
        key,
        sides,
        synthesized,
    } = task;
    match sides {
        Sides::LeftOnly(value) => one_sided(key, value, Side::Left, synthesized, work, done),
        Sides::RightOnly(value) => one_sided(key, value, Side::Right, synthesized, work, done),
        Sides::Both(left, right) => both_sides(key, left, right, work, done),
    }
}

fn one_sided<'a>(
    key: NodeKey,
    value: &'a Value,
    side: Side,
    synthesized: bool,
    work: &mut Vec<Work<'a>>,
    done: &mut Vec<DiffNode>,
) {
    let change = if synthesized {
        ChangeKind::Unchanged
    } else {
        match side {
            Side::Left => ChangeKind::Removed,
            Side::Right => ChangeKind::Added,
        }
    };
    let (left, right) = match side {
        Side::Left => (Some(value), None),
        Side::Right => (None, Some(value)),
    };
    let container = ContainerKind::of_value(value);

    if container.is_container() {
        let members = member_tasks(value, side);
        work.push(Work::Finish {
            key,
            change: Some(change),
            left,
            right,
            container,
            child_count: members.len(),
        });
        for task in members.into_iter().rev() {
            work.push(Work::Visit(task));
        }
    } else {
        done.push(DiffNode {
            key,
            change,
            left: left.cloned(),
            right: right.cloned(),
            container,
            children: Vec::new(),
        });
    }
}

fn both_sides<'a>(
    key: NodeKey,
    left: &'a Value,
    right: &'a Value,
    work: &mut Vec<Work<'a>>,
    done: &mut Vec<DiffNode>,
) {
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => {
            // Pair strictly by index; an out-of-range side is absent at
            // that index. A middle insertion therefore reads as a run of
            // modifications plus a trailing addition.
            let len = l.len().max(r.len());
            work.push(Work::Finish {
                key,
                change: None,
                left: Some(left),
                right: Some(right),
                container: ContainerKind::Sequence,
                child_count: len,
            });
            for index in (0..len).rev() {
                work.push(Work::Visit(Task {
                    key: NodeKey::Index(index),
                    sides: sides_at(l.get(index), r.get(index)),
                    synthesized: false,
                }));
            }
        }
        (Value::Object(l), Value::Object(r)) => {
            // Union of keys, each visited once: left's keys in left's
            // order, then right's unseen keys in right's order. This order
            // is what makes the output reproducible.
            let keys: Vec<&String> = l
                .keys()
                .chain(r.keys().filter(|k| !l.contains_key(k.as_str())))
                .collect();
            work.push(Work::Finish {
                key,
                change: None,
                left: Some(left),
                right: Some(right),
                container: ContainerKind::Mapping,
                child_count: keys.len(),
            });
            for name in keys.into_iter().rev() {
                work.push(Work::Visit(Task {
                    key: NodeKey::field(name),
                    sides: sides_at(l.get(name), r.get(name)),
                    synthesized: false,
                }));
            }
        }
        _ => done.push(compare_leafwise(key, left, right)),
    }
}

/// Compare a pair that does not recurse: two non-containers, or a shape
/// mismatch involving at least one container.
fn compare_leafwise(key: NodeKey, left: &Value, right: &Value) -> DiffNode {
    let left_kind = ValueKind::of(left);
    let right_kind = ValueKind::of(right);

    let (change, container) = if !left_kind.is_container() && !right_kind.is_container() {
        let change = if left == right {
            ChangeKind::Unchanged
        } else if left_kind == right_kind {
            ChangeKind::Modified
        } else {
            ChangeKind::TypeChanged
        };
        (change, ContainerKind::None)
    } else {
        // No attempt to pair up incompatible shapes: empty children, and
        // the container kind is taken from whichever side is a container,
        // preferring left.
        let container = match ContainerKind::of_value(left) {
            ContainerKind::None => ContainerKind::of_value(right),
            kind => kind,
        };
        (ChangeKind::TypeChanged, container)
    };

    DiffNode {
        key,
        change,
        left: Some(left.clone()),
        right: Some(right.clone()),
        container,
        children: Vec::new(),
    }
}

fn member_tasks<'a>(value: &'a Value, side: Side) -> Vec<Task<'a>> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| Task {
                key: NodeKey::Index(index),
                sides: Sides::one(side, item),
                synthesized: true,
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(name, item)| Task {
                key: NodeKey::field(name),
                sides: Sides::one(side, item),
                synthesized: true,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn sides_at<'a>(left: Option<&'a Value>, right: Option<&'a Value>) -> Sides<'a> {
    match (left, right) {
        (Some(left), Some(right)) => Sides::Both(left, right),
        (Some(left), None) => Sides::LeftOnly(left),
        (None, Some(right)) => Sides::RightOnly(right),
        (None, None) => unreachable!("paired keys are present on at least one side"),
    }
}
