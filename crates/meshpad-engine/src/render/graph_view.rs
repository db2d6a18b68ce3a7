use crate::coords::{Vec2, ViewMatrix};

/// Read-only per-frame snapshot of the edited graph.
///
/// `positions` holds the live vertex prefix, `indices` the flat line index
/// pairs (`2 * line_count` entries), `selected` the selected vertex indices.
/// `revision` changes whenever any of the three slices changed, so renderers
/// re-upload only when needed.
#[derive(Debug, Copy, Clone)]
pub struct GraphView<'a> {
    pub positions: &'a [Vec2],
    pub indices: &'a [u32],
    pub selected: &'a [u32],
    pub revision: u64,
    pub view: ViewMatrix,
}

impl GraphView<'_> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }
}
