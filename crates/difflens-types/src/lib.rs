//! Foundation types for difflens.
//!
//! This crate provides the classification vocabulary shared by the diff
//! engine and the view-state layer. Every other difflens crate depends on
//! `difflens-types`.
//!
//! # Key Types
//!
//! - [`ValueKind`] / [`ScalarKind`] — Runtime kind of a JSON value
//! - [`ChangeKind`] — Per-node change classification
//! - [`ContainerKind`] — Sequence/mapping flavor of a container node
//! - [`NodeKey`] — The key a node occupies among its siblings
//! - [`Side`] — Which input a one-sided value came from

pub mod change;
pub mod key;
pub mod kind;

pub use change::{ChangeKind, ContainerKind, Side};
pub use key::NodeKey;
pub use kind::{is_shape_compatible, ScalarKind, ValueKind};
