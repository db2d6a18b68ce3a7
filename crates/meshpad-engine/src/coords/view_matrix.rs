use super::Vec2;

/// 3×2 affine matrix mapping canvas coordinates to NDC.
///
/// Stored column-major: `cols[0]` and `cols[1]` are the linear part,
/// `cols[2]` the translation. A point maps as
/// `ndc = cols[0] * p.x + cols[1] * p.y + cols[2]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewMatrix {
    pub cols: [Vec2; 3],
}

impl Default for ViewMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewMatrix {
    pub const IDENTITY: ViewMatrix = ViewMatrix {
        cols: [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0)],
    };

    #[inline]
    pub const fn from_cols(c0: Vec2, c1: Vec2, c2: Vec2) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.cols[2]
    }

    /// Determinant of the linear 2×2 block.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [a, b, _] = self.cols;
        a.x * b.y - b.x * a.y
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.transform_vector(p) + self.cols[2]
    }

    /// Applies the linear part only.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.cols[0] * v.x + self.cols[1] * v.y
    }

    /// Applies the inverse of the linear part.
    ///
    /// Returns `None` when the linear block is singular.
    pub fn inverse_transform_vector(&self, v: Vec2) -> Option<Vec2> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let [a, b, _] = self.cols;
        // Inverse of [[a.x b.x] [a.y b.y]] is 1/det * [[b.y -b.x] [-a.y a.x]].
        Some(Vec2::new(
            (b.y * v.x - b.x * v.y) / det,
            (a.x * v.y - a.y * v.x) / det,
        ))
    }

    /// Maps an NDC point back to canvas space.
    #[inline]
    pub fn inverse_transform_point(&self, ndc: Vec2) -> Option<Vec2> {
        self.inverse_transform_vector(ndc - self.cols[2])
    }

    /// Column-major floats, `[c0.x, c0.y, c1.x, c1.y, c2.x, c2.y]`.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 6] {
        let [a, b, c] = self.cols;
        [a.x, a.y, b.x, b.y, c.x, c.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length_squared() < 1e-10
    }

    #[test]
    fn identity_is_noop() {
        let p = Vec2::new(0.25, -3.0);
        assert_eq!(ViewMatrix::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn inverse_undoes_forward() {
        let m = ViewMatrix::from_cols(
            Vec2::new(0.8, 0.6 * 1.5),
            Vec2::new(-0.6, 0.8 * 1.5),
            Vec2::new(0.1, -0.2),
        );
        let p = Vec2::new(0.4, 0.7);
        let back = m.inverse_transform_point(m.transform_point(p)).unwrap();
        assert!(approx(back, p));
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = ViewMatrix::from_cols(Vec2::new(1.0, 2.0), Vec2::new(2.0, 4.0), Vec2::zero());
        assert!(m.inverse_transform_vector(Vec2::new(1.0, 1.0)).is_none());
    }
}
