//! Diff engine for difflens.
//!
//! Compares two JSON values structurally and produces a [`DiffNode`] tree
//! annotated with a change classification at every node. One-sided branches
//! (added or removed containers) are fully materialized so the tree stays
//! walkable on whichever side has data.
//!
//! # Key Types
//!
//! - [`DiffNode`] — One node of the annotated output tree
//! - [`diff_values`] — The engine entry point
//! - [`synthesize_one_sided`] — Child materialization for one-sided branches
//! - [`DiffStats`] / [`collect_stats`] — Per-classification node counts

pub mod engine;
pub mod node;
pub mod stats;

pub use engine::{diff_values, synthesize_one_sided};
pub use node::DiffNode;
pub use stats::{collect_stats, DiffStats};
