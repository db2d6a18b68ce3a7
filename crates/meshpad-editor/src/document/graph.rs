use meshpad_engine::coords::Vec2;

use crate::config::EditorConfig;
use crate::error::GraphError;

use super::Selection;

/// Vertex positions and line segments with fixed capacities.
///
/// The graph is append-only: vertices and lines are never removed, so every
/// stored line index stays valid. Positions live in canvas space.
///
/// Every vertex is tracked by the owned [`Selection`]; new vertices start
/// unselected.
#[derive(Debug, Clone)]
pub struct Graph {
    positions: Vec<Vec2>,
    vertex_capacity: usize,

    /// Flat line index pairs, `2 * line_count` entries.
    indices: Vec<u32>,
    line_capacity: usize,

    selection: Selection,

    revision: u64,
}

impl Graph {
    /// Creates an empty graph. Capacities must fit `u32` indices
    /// (see [`EditorConfig::validate`]).
    pub fn with_capacity(vertex_capacity: usize, line_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            vertex_capacity,
            indices: Vec::with_capacity(line_capacity * 2),
            line_capacity,
            selection: Selection::with_capacity(vertex_capacity),
            revision: 0,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::with_capacity(config.vertex_capacity, config.line_capacity)
    }

    /// The startup graph: a bent three-vertex polyline.
    pub fn demo(config: &EditorConfig) -> Result<Self, GraphError> {
        let mut graph = Self::from_config(config);
        graph.add_vertex(Vec2::new(0.0, 0.0))?;
        graph.add_vertex(Vec2::new(0.1, 0.1))?;
        graph.add_vertex(Vec2::new(0.2, 0.1))?;
        graph.add_line(0, 1)?;
        graph.add_line(1, 2)?;
        Ok(graph)
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }

    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }

    #[inline]
    pub fn line_capacity(&self) -> usize {
        self.line_capacity
    }

    #[inline]
    pub fn has_vertex_room(&self) -> bool {
        self.vertex_count() < self.vertex_capacity
    }

    #[inline]
    pub fn has_line_room(&self) -> bool {
        self.line_count() < self.line_capacity
    }

    /// Bumped on every mutation (positions, lines or selection).
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── vertices ──────────────────────────────────────────────────────────

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec2) -> Result<usize, GraphError> {
        if !self.has_vertex_room() {
            return Err(GraphError::VertexCapacity { capacity: self.vertex_capacity });
        }

        let index = self.positions.len();
        self.positions.push(position);
        self.selection.register_new(index);
        self.touch();
        Ok(index)
    }

    /// Panics if `index` is not a live vertex.
    #[inline]
    pub fn position(&self, index: usize) -> Vec2 {
        self.positions[index]
    }

    /// Overwrites a vertex position. Panics if `index` is not a live vertex.
    pub fn set_position(&mut self, index: usize, position: Vec2) {
        assert!(index < self.vertex_count(), "vertex {index} out of range");
        self.positions[index] = position;
        self.touch();
    }

    /// Moves a vertex by `delta`. Panics if `index` is not a live vertex.
    pub fn translate_vertex(&mut self, index: usize, delta: Vec2) {
        let position = self.position(index) + delta;
        self.set_position(index, position);
    }

    /// Live vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    // ── lines ─────────────────────────────────────────────────────────────

    /// Appends the segment `a`–`b` and returns its line index.
    ///
    /// Panics if either endpoint is not a live vertex.
    pub fn add_line(&mut self, a: usize, b: usize) -> Result<usize, GraphError> {
        let n = self.vertex_count();
        assert!(a < n && b < n, "line ({a}, {b}) references a vertex >= {n}");

        if !self.has_line_room() {
            return Err(GraphError::LineCapacity { capacity: self.line_capacity });
        }

        let index = self.line_count();
        self.indices.push(a as u32);
        self.indices.push(b as u32);
        self.touch();
        Ok(index)
    }

    /// Endpoints of line `index`. Panics if out of range.
    pub fn line(&self, index: usize) -> (usize, usize) {
        let i = index * 2;
        (self.indices[i] as usize, self.indices[i + 1] as usize)
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices
            .chunks_exact(2)
            .map(|pair| (pair[0] as usize, pair[1] as usize))
    }

    /// Flat line index pairs.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    // ── picking ───────────────────────────────────────────────────────────

    /// Index of the vertex nearest to `point`; ties go to the lowest index.
    ///
    /// `None` only when the graph has no vertices.
    pub fn closest_vertex(&self, point: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &p) in self.positions.iter().enumerate() {
            let d = (p - point).length_squared();
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((index, d));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Like [`closest_vertex`](Self::closest_vertex) but rejects vertices
    /// farther than `radius` from `point`.
    pub fn closest_vertex_within(&self, point: Vec2, radius: f32) -> Option<usize> {
        self.closest_vertex(point)
            .filter(|&index| (self.positions[index] - point).length_squared() <= radius * radius)
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Flips the selection state of `vertex`; returns the new state.
    ///
    /// Panics if `vertex` is not a live vertex.
    pub fn toggle_selected(&mut self, vertex: usize) -> bool {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of range");
        let selected = self.selection.toggle(vertex);
        self.touch();
        selected
    }

    #[inline]
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Graph {
        Graph::demo(&EditorConfig::default()).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn demo_graph_layout() {
        let g = demo();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.line_count(), 2);
        assert_eq!(g.position(1), Vec2::new(0.1, 0.1));
        assert_eq!(g.lines().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
        assert_eq!(g.indices(), &[0, 1, 1, 2]);
        assert_eq!(g.selection().count(), 0);
    }

    #[test]
    fn demo_needs_room() {
        let config = EditorConfig::default().line_capacity(1);
        assert_eq!(Graph::demo(&config).unwrap_err(), GraphError::LineCapacity { capacity: 1 });
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn add_vertex_past_capacity_is_rejected() {
        let mut g = Graph::with_capacity(2, 4);
        assert_eq!(g.add_vertex(Vec2::zero()), Ok(0));
        assert_eq!(g.add_vertex(Vec2::zero()), Ok(1));
        let revision = g.revision();

        assert_eq!(
            g.add_vertex(Vec2::new(1.0, 1.0)),
            Err(GraphError::VertexCapacity { capacity: 2 })
        );
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.selection().len(), 2);
        assert_eq!(g.revision(), revision);
    }

    #[test]
    fn add_line_past_capacity_is_rejected() {
        let mut g = Graph::with_capacity(4, 1);
        g.add_vertex(Vec2::zero()).unwrap();
        g.add_vertex(Vec2::zero()).unwrap();
        g.add_line(0, 1).unwrap();
        assert_eq!(g.add_line(1, 0), Err(GraphError::LineCapacity { capacity: 1 }));
        assert_eq!(g.line_count(), 1);
    }

    #[test]
    #[should_panic]
    fn add_line_to_missing_vertex_panics() {
        let mut g = demo();
        let _ = g.add_line(0, 3);
    }

    #[test]
    #[should_panic]
    fn set_position_out_of_range_panics() {
        let mut g = demo();
        g.set_position(3, Vec2::zero());
    }

    // ── mutation ──────────────────────────────────────────────────────────

    #[test]
    fn translate_moves_only_that_vertex() {
        let mut g = demo();
        let delta = Vec2::new(0.5, -0.25);
        g.translate_vertex(1, delta);
        assert_eq!(g.position(0), Vec2::new(0.0, 0.0));
        assert_eq!(g.position(1), Vec2::new(0.1, 0.1) + delta);
        assert_eq!(g.position(2), Vec2::new(0.2, 0.1));
    }

    #[test]
    fn mutations_bump_revision() {
        let mut g = demo();
        let r0 = g.revision();
        g.set_position(0, Vec2::new(1.0, 0.0));
        let r1 = g.revision();
        g.toggle_selected(0);
        let r2 = g.revision();
        assert!(r0 < r1 && r1 < r2);
    }

    // ── picking ───────────────────────────────────────────────────────────

    #[test]
    fn closest_vertex_empty_graph() {
        let g = Graph::with_capacity(4, 4);
        assert_eq!(g.closest_vertex(Vec2::zero()), None);
    }

    #[test]
    fn closest_vertex_picks_nearest() {
        let g = demo();
        assert_eq!(g.closest_vertex(Vec2::new(-1.0, -1.0)), Some(0));
        assert_eq!(g.closest_vertex(Vec2::new(0.11, 0.09)), Some(1));
        assert_eq!(g.closest_vertex(Vec2::new(5.0, 0.1)), Some(2));
    }

    #[test]
    fn closest_vertex_tie_goes_to_lowest_index() {
        let mut g = Graph::with_capacity(4, 4);
        g.add_vertex(Vec2::new(1.0, 0.0)).unwrap();
        g.add_vertex(Vec2::new(-1.0, 0.0)).unwrap();
        g.add_vertex(Vec2::new(1.0, 0.0)).unwrap();
        assert_eq!(g.closest_vertex(Vec2::zero()), Some(0));
        assert_eq!(g.closest_vertex(Vec2::new(1.0, 0.0)), Some(0));
    }

    #[test]
    fn closest_vertex_within_radius() {
        let g = demo();
        assert_eq!(g.closest_vertex_within(Vec2::new(0.0, 0.05), 0.1), Some(0));
        assert_eq!(g.closest_vertex_within(Vec2::new(3.0, 3.0), 0.1), None);
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn double_toggle_is_identity() {
        let mut g = demo();
        g.toggle_selected(1);
        assert_eq!(g.selection().count(), 1);
        g.toggle_selected(1);
        assert_eq!(g.selection().count(), 0);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.line_count(), 2);
        g.selection().assert_consistent();
    }

    #[test]
    fn added_vertex_joins_selection_unselected() {
        let mut g = demo();
        g.toggle_selected(0);
        let v = g.add_vertex(Vec2::new(1.0, 1.0)).unwrap();
        assert!(!g.selection().is_selected(v));
        assert_eq!(g.selection().count(), 1);
        assert_eq!(g.selection().len(), g.vertex_count());
        g.selection().assert_consistent();
    }
}
