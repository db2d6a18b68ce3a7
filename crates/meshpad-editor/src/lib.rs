//! meshpad editor core.
//!
//! Owns the edited graph (vertex positions, line index pairs and the
//! selection set), the view transform, and the operation controller that turns
//! platform-agnostic input events into edits. Nothing here touches the GPU:
//! the host reads [`Editor::graph_view`] every frame and hands it to the
//! engine's renderers.
//!
//! Layers:
//! - `document`: graph store, permutation selection set, view transform
//! - `ops`: pan / drag / select / extrude gesture implementations
//! - `controller`: idle-or-one-active state machine and its binding table
//! - `editor`: the facade the host drives

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod ops;

mod editor;

pub use config::EditorConfig;
pub use editor::{Editor, FrameSnapshot};
pub use error::{ConfigError, EditorError, GraphError};
