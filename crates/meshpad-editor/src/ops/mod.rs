//! Editing operations.
//!
//! Each operation handles one gesture: `trigger` on the starting input, then
//! (while active) `on_move` for every pointer move and `on_release` for the
//! terminating button-up. Per-gesture scratch state lives in the operation
//! itself; the [`Controller`](crate::controller::Controller) decides which
//! one is active.

mod drag;
mod extrude;
mod pan;
mod select;

pub use drag::DragOperation;
pub use extrude::ExtrudeOperation;
pub use pan::PanOperation;
pub use select::SelectOperation;

use std::fmt;

use meshpad_engine::coords::Vec2;
use meshpad_engine::input::{Key, KeyState};

use crate::document::Document;

/// Whether an operation holds the controller after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OpState {
    /// Gesture in progress; keep routing input here.
    Active,
    /// Done (or never started); the controller returns to idle.
    Inactive,
}

/// Identifies one of the editor's operations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OperationKind {
    Pan,
    Drag,
    Select,
    Extrude,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Pan => "pan",
            OperationKind::Drag => "drag",
            OperationKind::Select => "select",
            OperationKind::Extrude => "extrude",
        };
        f.write_str(name)
    }
}

/// Gesture lifecycle shared by all operations.
///
/// Positions are pointer positions in logical pixels (origin top-left).
pub trait Operation {
    /// Starts a gesture at `pointer`.
    ///
    /// Single-shot operations do all their work here and return
    /// [`OpState::Inactive`]; so does an operation that declines to start.
    fn trigger(&mut self, doc: &mut Document, pointer: Vec2) -> OpState;

    /// Pointer moved while this operation is active.
    fn on_move(&mut self, doc: &mut Document, pointer: Vec2) {
        let _ = (doc, pointer);
    }

    /// A button was released (or focus was lost) while active.
    ///
    /// Gesture operations must return [`OpState::Inactive`] here so input
    /// can never stay latched.
    fn on_release(&mut self, doc: &mut Document, pointer: Vec2) -> OpState {
        let _ = (doc, pointer);
        OpState::Inactive
    }

    /// Key event while active.
    fn on_key(&mut self, doc: &mut Document, key: Key, state: KeyState) -> OpState {
        let _ = (doc, key, state);
        OpState::Active
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use meshpad_engine::coords::Vec2;

    use crate::config::EditorConfig;
    use crate::document::{Document, Graph};

    /// Demo graph in an 800×600 view.
    pub(crate) fn demo_document() -> Document {
        let mut doc = Document::new(Graph::demo(&EditorConfig::default()).unwrap());
        doc.view.resize(800.0, 600.0);
        doc
    }

    /// Screen position of vertex `v`.
    pub(crate) fn screen_of(doc: &Document, v: usize) -> Vec2 {
        doc.view.canvas_to_screen(doc.graph.position(v))
    }

    pub(crate) fn assert_near(a: Vec2, b: Vec2) {
        assert!((a - b).length_squared() < 1e-10, "{a:?} != {b:?}");
    }
}
