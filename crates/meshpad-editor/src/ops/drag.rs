use meshpad_engine::coords::Vec2;

use crate::document::Document;

use super::{OpState, Operation};

/// Moves the vertex nearest to the press point along with the pointer.
#[derive(Debug, Default)]
pub struct DragOperation {
    pick_radius: Option<f32>,
    vertex: Option<usize>,
    last_canvas: Vec2,
}

impl DragOperation {
    pub fn new(pick_radius: Option<f32>) -> Self {
        Self { pick_radius, ..Self::default() }
    }

    /// Vertex grabbed by the current gesture.
    pub fn vertex(&self) -> Option<usize> {
        self.vertex
    }
}

impl Operation for DragOperation {
    fn trigger(&mut self, doc: &mut Document, pointer: Vec2) -> OpState {
        let canvas = doc.view.screen_to_canvas(pointer);
        let Some(vertex) = doc.pick(canvas, self.pick_radius) else {
            log::trace!("drag: nothing to grab at {canvas:?}");
            return OpState::Inactive;
        };

        log::debug!("drag: grabbed vertex {vertex}");
        self.vertex = Some(vertex);
        self.last_canvas = canvas;
        OpState::Active
    }

    fn on_move(&mut self, doc: &mut Document, pointer: Vec2) {
        let Some(vertex) = self.vertex else { return };
        let canvas = doc.view.screen_to_canvas(pointer);
        doc.graph.translate_vertex(vertex, canvas - self.last_canvas);
        self.last_canvas = canvas;
    }

    fn on_release(&mut self, _doc: &mut Document, _pointer: Vec2) -> OpState {
        self.vertex = None;
        OpState::Inactive
    }
}
