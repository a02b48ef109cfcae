//! View-state layer for difflens.
//!
//! Sits directly on top of the diff tree and supplies everything a renderer
//! needs for an incremental, filterable display: stable string addresses
//! for nodes, an expansion-state store keyed by those addresses, and the
//! "show only changed" child filter. The renderer itself (terminal, HTML,
//! anything else) lives outside this crate and consumes the tree read-only.
//!
//! # Modules
//!
//! - [`path`] — [`TreePath`] addressing with a collision-free join rule
//! - [`walk`] — Iterative pre-order traversal yielding paths
//! - [`expansion`] — The [`ExpansionState`] store
//! - [`filter`] — [`visible_children`] change filtering
//! - [`viewer`] — The [`DiffViewer`] session facade

pub mod expansion;
pub mod filter;
pub mod path;
pub mod viewer;
pub mod walk;

pub use expansion::ExpansionState;
pub use filter::visible_children;
pub use path::TreePath;
pub use viewer::DiffViewer;
pub use walk::walk;
