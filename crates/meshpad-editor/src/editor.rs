use meshpad_engine::coords::ViewMatrix;
use meshpad_engine::input::InputEvent;
use meshpad_engine::render::GraphView;

use crate::config::EditorConfig;
use crate::controller::Controller;
use crate::document::{Document, Graph};
use crate::error::EditorError;
use crate::ops::OperationKind;

/// Counts and view state after the last handled event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub vertex_count: usize,
    pub line_count: usize,
    pub selection_count: usize,
    pub view_matrix: ViewMatrix,
}

/// Document plus the controller that edits it.
///
/// This is the whole editor surface the host needs: forward resizes and input
/// events in arrival order, then read [`Editor::graph_view`] when drawing.
pub struct Editor {
    config: EditorConfig,
    document: Document,
    controller: Controller,
}

impl Editor {
    /// Creates an editor with an empty graph.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        let document = Document::empty(&config);
        let controller = Controller::new(&config);
        Ok(Self { config, document, controller })
    }

    /// Creates an editor seeded with the three-vertex demo graph.
    pub fn with_demo(config: EditorConfig) -> Result<Self, EditorError> {
        let mut editor = Self::new(config)?;
        editor.document.graph = Graph::demo(&editor.config)?;
        Ok(editor)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for hosts that script edits directly.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn active_operation(&self) -> Option<OperationKind> {
        self.controller.current()
    }

    /// New drawable size in logical pixels. Zero-area sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.document.view.resize(width, height) {
            log::debug!("viewport {width}x{height}");
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.controller.handle_event(&mut self.document, event);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let graph = &self.document.graph;
        FrameSnapshot {
            vertex_count: graph.vertex_count(),
            line_count: graph.line_count(),
            selection_count: graph.selection().count(),
            view_matrix: self.document.view.matrix(),
        }
    }

    /// Per-frame view handed to the renderers.
    pub fn graph_view(&self) -> GraphView<'_> {
        let graph = &self.document.graph;
        GraphView {
            positions: graph.positions(),
            indices: graph.indices(),
            selected: graph.selection().as_indices(),
            revision: graph.revision(),
            view: self.document.view.matrix(),
        }
    }
}
