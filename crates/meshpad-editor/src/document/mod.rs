//! Editable state: the graph (with its selection) and the view.
//!
//! Operations receive a `&mut Document`; nothing here is global.

mod graph;
mod selection;
mod view;

pub use graph::Graph;
pub use selection::Selection;
pub use view::ViewTransform;

use meshpad_engine::coords::Vec2;

use crate::config::EditorConfig;
use crate::error::GraphError;

#[derive(Debug, Clone)]
pub struct Document {
    pub graph: Graph,
    pub view: ViewTransform,
}

impl Document {
    pub fn new(graph: Graph) -> Self {
        Self { graph, view: ViewTransform::new() }
    }

    pub fn empty(config: &EditorConfig) -> Self {
        Self::new(Graph::from_config(config))
    }

    /// Pick policy shared by Drag and Select: nearest vertex to a canvas
    /// point, optionally limited to `pick_radius`.
    pub fn pick(&self, canvas: Vec2, pick_radius: Option<f32>) -> Option<usize> {
        match pick_radius {
            Some(radius) => self.graph.closest_vertex_within(canvas, radius),
            None => self.graph.closest_vertex(canvas),
        }
    }

    /// Grows a new vertex at `canvas` from the single selected vertex.
    ///
    /// Returns `Ok(None)` without touching the graph unless exactly one vertex
    /// is selected. Capacity is checked for both the vertex and the line
    /// before anything is added, so a rejected extrude leaves no orphan
    /// vertex behind. The selection is left as is.
    pub fn extrude(&mut self, canvas: Vec2) -> Result<Option<(usize, usize)>, GraphError> {
        let Some(source) = self.graph.selection().only() else {
            return Ok(None);
        };

        if !self.graph.has_vertex_room() {
            return Err(GraphError::VertexCapacity { capacity: self.graph.vertex_capacity() });
        }
        if !self.graph.has_line_room() {
            return Err(GraphError::LineCapacity { capacity: self.graph.line_capacity() });
        }

        let vertex = self.graph.add_vertex(canvas)?;
        let line = self.graph.add_line(source, vertex)?;
        Ok(Some((vertex, line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Document {
        Document::new(Graph::demo(&EditorConfig::default()).unwrap())
    }

    #[test]
    fn extrude_from_single_selection() {
        let mut doc = demo();
        doc.graph.toggle_selected(0);

        let p = Vec2::new(0.5, 0.5);
        assert_eq!(doc.extrude(p), Ok(Some((3, 2))));
        assert_eq!(doc.graph.vertex_count(), 4);
        assert_eq!(doc.graph.line_count(), 3);
        assert_eq!(doc.graph.line(2), (0, 3));
        assert_eq!(doc.graph.position(3), p);
        // Selection unchanged.
        assert_eq!(doc.graph.selection().only(), Some(0));
    }

    #[test]
    fn extrude_needs_exactly_one_selected() {
        let mut doc = demo();
        assert_eq!(doc.extrude(Vec2::new(1.0, 1.0)), Ok(None));

        doc.graph.toggle_selected(0);
        doc.graph.toggle_selected(2);
        assert_eq!(doc.extrude(Vec2::new(1.0, 1.0)), Ok(None));

        doc.graph.toggle_selected(1);
        assert_eq!(doc.extrude(Vec2::new(1.0, 1.0)), Ok(None));

        assert_eq!(doc.graph.vertex_count(), 3);
        assert_eq!(doc.graph.line_count(), 2);
    }

    #[test]
    fn extrude_without_line_room_adds_nothing() {
        let config = EditorConfig::default().line_capacity(2);
        let mut doc = Document::new(Graph::demo(&config).unwrap());
        doc.graph.toggle_selected(2);

        assert_eq!(
            doc.extrude(Vec2::new(1.0, 0.0)),
            Err(GraphError::LineCapacity { capacity: 2 })
        );
        assert_eq!(doc.graph.vertex_count(), 3);
        assert_eq!(doc.graph.line_count(), 2);
    }

    #[test]
    fn pick_respects_radius() {
        let doc = demo();
        let far = Vec2::new(2.0, 2.0);
        assert_eq!(doc.pick(far, None), Some(2));
        assert_eq!(doc.pick(far, Some(0.5)), None);
    }
}
