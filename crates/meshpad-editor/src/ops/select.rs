use meshpad_engine::coords::Vec2;

use crate::document::Document;

use super::{OpState, Operation};

/// Toggles selection of the vertex nearest to the click. Single-shot.
#[derive(Debug, Default)]
pub struct SelectOperation {
    pick_radius: Option<f32>,
}

impl SelectOperation {
    pub fn new(pick_radius: Option<f32>) -> Self {
        Self { pick_radius }
    }
}

impl Operation for SelectOperation {
    fn trigger(&mut self, doc: &mut Document, pointer: Vec2) -> OpState {
        let canvas = doc.view.screen_to_canvas(pointer);
        if let Some(vertex) = doc.pick(canvas, self.pick_radius) {
            let selected = doc.graph.toggle_selected(vertex);
            log::debug!(
                "select: vertex {vertex} {} ({} selected)",
                if selected { "selected" } else { "deselected" },
                doc.graph.selection().count(),
            );
        }
        OpState::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::ops::test_support::{demo_document, screen_of};

    #[test]
    fn toggles_nearest_and_never_latches() {
        let mut doc = demo_document();
        let mut select = SelectOperation::default();
        let at = screen_of(&doc, 2) + Vec2::new(3.0, -2.0);

        assert_eq!(select.trigger(&mut doc, at), OpState::Inactive);
        assert!(doc.graph.selection().is_selected(2));
        assert_eq!(doc.graph.selection().only(), Some(2));

        assert_eq!(select.trigger(&mut doc, at), OpState::Inactive);
        assert!(!doc.graph.selection().is_selected(2));
        assert_eq!(doc.graph.selection().count(), 0);
    }

    #[test]
    fn empty_graph_is_a_no_op() {
        let mut doc = Document::empty(&EditorConfig::default());
        doc.view.resize(800.0, 600.0);
        let revision = doc.graph.revision();

        let mut select = SelectOperation::default();
        assert_eq!(select.trigger(&mut doc, Vec2::new(10.0, 10.0)), OpState::Inactive);
        assert_eq!(doc.graph.revision(), revision);
    }
}
