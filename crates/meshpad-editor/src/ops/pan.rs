use meshpad_engine::coords::Vec2;

use crate::document::Document;

use super::{OpState, Operation};

/// Pans the view by the pointer's pixel motion.
#[derive(Debug, Default)]
pub struct PanOperation {
    last: Vec2,
}

impl Operation for PanOperation {
    fn trigger(&mut self, _doc: &mut Document, pointer: Vec2) -> OpState {
        self.last = pointer;
        OpState::Active
    }

    fn on_move(&mut self, doc: &mut Document, pointer: Vec2) {
        doc.view.pan_by_pixels(pointer - self.last);
        self.last = pointer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{assert_near, demo_document};

    #[test]
    fn pans_by_incremental_delta() {
        let mut doc = demo_document();
        let revision = doc.graph.revision();
        let mut pan = PanOperation::default();

        assert_eq!(pan.trigger(&mut doc, Vec2::new(100.0, 100.0)), OpState::Active);
        pan.on_move(&mut doc, Vec2::new(120.0, 115.0));
        pan.on_move(&mut doc, Vec2::new(140.0, 130.0));
        // Repeated identical input adds nothing.
        pan.on_move(&mut doc, Vec2::new(140.0, 130.0));

        assert_near(doc.view.center(), Vec2::new(0.1, -0.1));
        assert_eq!(pan.on_release(&mut doc, Vec2::new(140.0, 130.0)), OpState::Inactive);
        assert_eq!(doc.graph.revision(), revision);
    }
}
