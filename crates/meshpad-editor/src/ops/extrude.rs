use meshpad_engine::coords::Vec2;

use crate::document::Document;

use super::{OpState, Operation};

/// Adds a vertex under the pointer connected to the single selected vertex.
/// Single-shot.
#[derive(Debug, Default)]
pub struct ExtrudeOperation;

impl Operation for ExtrudeOperation {
    fn trigger(&mut self, doc: &mut Document, pointer: Vec2) -> OpState {
        let canvas = doc.view.screen_to_canvas(pointer);
        match doc.extrude(canvas) {
            Ok(Some((vertex, line))) => {
                log::debug!("extrude: vertex {vertex} at {canvas:?}, line {line}");
            }
            Ok(None) => {
                log::debug!(
                    "extrude: needs exactly one selected vertex, have {}",
                    doc.graph.selection().count()
                );
            }
            Err(err) => log::warn!("extrude rejected: {err}"),
        }
        OpState::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::document::Graph;
    use crate::ops::test_support::{assert_near, demo_document};

    #[test]
    fn extrudes_at_pointer() {
        let mut doc = demo_document();
        doc.graph.toggle_selected(0);

        // 800×600: (600, 100) is NDC (0.5, 0.6667) → canvas (0.5, 0.5).
        let mut extrude = ExtrudeOperation;
        assert_eq!(extrude.trigger(&mut doc, Vec2::new(600.0, 100.0)), OpState::Inactive);

        assert_eq!(doc.graph.vertex_count(), 4);
        assert_eq!(doc.graph.line_count(), 3);
        assert_eq!(doc.graph.line(2), (0, 3));
        assert_near(doc.graph.position(3), Vec2::new(0.5, 0.5));
        assert!(!doc.graph.selection().is_selected(3));
    }

    #[test]
    fn capacity_rejection_leaves_graph_untouched() {
        let config = EditorConfig::default().vertex_capacity(3);
        let mut doc = Document::new(Graph::demo(&config).unwrap());
        doc.view.resize(800.0, 600.0);
        doc.graph.toggle_selected(1);
        let revision = doc.graph.revision();

        assert_eq!(ExtrudeOperation.trigger(&mut doc, Vec2::new(10.0, 10.0)), OpState::Inactive);
        assert_eq!(doc.graph.vertex_count(), 3);
        assert_eq!(doc.graph.line_count(), 2);
        assert_eq!(doc.graph.revision(), revision);
    }
}
