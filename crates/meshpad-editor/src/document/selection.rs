/// Set of selected vertices, stored as a partitioned permutation.
///
/// `perm` holds every vertex index exactly once; `perm[..count]` are the
/// selected vertices (in no particular order), the rest are unselected.
/// `slot_of` is the inverse permutation, so membership is one lookup and a
/// toggle is one swap across the partition boundary.
///
/// Invariants, after every method:
/// - `perm` is a permutation of `0..len()`
/// - `slot_of[perm[s]] == s` for every slot `s`
/// - `count <= len()`
#[derive(Debug, Clone, Default)]
pub struct Selection {
    perm: Vec<u32>,
    slot_of: Vec<u32>,
    count: usize,
}

impl Selection {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            perm: Vec::with_capacity(capacity),
            slot_of: Vec::with_capacity(capacity),
            count: 0,
        }
    }

    /// Number of vertices tracked (selected or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// Number of selected vertices.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Panics if `vertex` was never registered.
    #[inline]
    pub fn is_selected(&self, vertex: usize) -> bool {
        (self.slot_of[vertex] as usize) < self.count
    }

    /// The selected vertex, if exactly one is selected.
    pub fn only(&self) -> Option<usize> {
        match self.count {
            1 => Some(self.perm[0] as usize),
            _ => None,
        }
    }

    /// Selected vertices. Re-invoke to iterate again.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.perm[..self.count].iter().map(|&v| v as usize)
    }

    /// Selected vertices as raw indices, for the renderer.
    #[inline]
    pub fn as_indices(&self) -> &[u32] {
        &self.perm[..self.count]
    }

    /// Appends a new vertex at the tail of the unselected region.
    ///
    /// Vertices must be registered in index order: `vertex == self.len()`.
    pub fn register_new(&mut self, vertex: usize) {
        assert_eq!(vertex, self.perm.len(), "vertices must be registered in order");
        self.perm.push(vertex as u32);
        self.slot_of.push(vertex as u32);
    }

    /// Flips `vertex` between selected and unselected. Returns the new state.
    ///
    /// O(1): a single swap with the boundary slot.
    pub fn toggle(&mut self, vertex: usize) -> bool {
        let slot = self.slot_of[vertex] as usize;
        if slot < self.count {
            self.count -= 1;
            self.swap_slots(slot, self.count);
            false
        } else {
            self.swap_slots(slot, self.count);
            self.count += 1;
            true
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.perm.swap(a, b);
        self.slot_of[self.perm[a] as usize] = a as u32;
        self.slot_of[self.perm[b] as usize] = b as u32;
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.perm.len(), self.slot_of.len());
        assert!(self.count <= self.perm.len());
        let mut seen = vec![false; self.perm.len()];
        for (slot, &v) in self.perm.iter().enumerate() {
            assert!(!std::mem::replace(&mut seen[v as usize], true), "vertex {v} appears twice");
            assert_eq!(self.slot_of[v as usize] as usize, slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(n: usize) -> Selection {
        let mut s = Selection::with_capacity(n);
        for v in 0..n {
            s.register_new(v);
        }
        s
    }

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn new_vertices_start_unselected() {
        let s = selection(4);
        assert_eq!(s.count(), 0);
        assert!((0..4).all(|v| !s.is_selected(v)));
        s.assert_consistent();
    }

    #[test]
    fn register_after_selection_stays_unselected() {
        let mut s = selection(3);
        s.toggle(2);
        s.register_new(3);
        assert!(!s.is_selected(3));
        assert!(s.is_selected(2));
        s.assert_consistent();
    }

    #[test]
    #[should_panic]
    fn register_out_of_order_panics() {
        let mut s = selection(2);
        s.register_new(5);
    }

    // ── toggle ────────────────────────────────────────────────────────────

    #[test]
    fn toggle_selects_then_deselects() {
        let mut s = selection(3);
        assert!(s.toggle(1));
        assert_eq!(s.count(), 1);
        assert_eq!(s.only(), Some(1));
        assert!(!s.toggle(1));
        assert_eq!(s.count(), 0);
        assert_eq!(s.only(), None);
        s.assert_consistent();
    }

    #[test]
    fn deselect_from_middle_of_selected_prefix() {
        let mut s = selection(5);
        for v in [4, 0, 2] {
            s.toggle(v);
        }
        s.toggle(0);
        let mut selected: Vec<usize> = s.iter().collect();
        selected.sort_unstable();
        assert_eq!(selected, vec![2, 4]);
        s.assert_consistent();
    }

    #[test]
    fn iter_is_restartable() {
        let mut s = selection(3);
        s.toggle(0);
        s.toggle(2);
        assert_eq!(s.iter().count(), 2);
        assert_eq!(s.iter().count(), 2);
        assert_eq!(s.as_indices().len(), 2);
    }

    #[test]
    fn toggle_sequence_tracks_parity() {
        const N: usize = 16;
        let mut s = selection(N);
        let mut toggles = [0u32; N];

        // Small LCG; deterministic and dependency-free.
        let mut x: u32 = 12345;
        for _ in 0..500 {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let v = (x >> 16) as usize % N;
            s.toggle(v);
            toggles[v] += 1;

            s.assert_consistent();
            for (u, &t) in toggles.iter().enumerate() {
                assert_eq!(s.is_selected(u), t % 2 == 1);
            }
            let expected = toggles.iter().filter(|&&t| t % 2 == 1).count();
            assert_eq!(s.count(), expected);
        }
    }
}
