use meshpad_engine::coords::{Vec2, Viewport, ViewMatrix};

/// Pan/rotate/scale state of the canvas view and the matching 3×2 matrix.
///
/// `center` is the NDC translation, `right` the image of the canvas x axis
/// before aspect correction; its perpendicular spans y. The matrix is
///
/// ```text
/// c0 = (right.x,  right.y * aspect)
/// c1 = (-right.y, right.x * aspect)
/// c2 = center
/// ```
///
/// with `aspect = width / height`, so one canvas unit covers the same number
/// of pixels horizontally and vertically. The renderer applies this exact
/// matrix; [`screen_to_canvas`](Self::screen_to_canvas) inverts it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    center: Vec2,
    right: Vec2,
    viewport: Viewport,
    matrix: ViewMatrix,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Centered, axis-aligned view over a 1×1 viewport. Call
    /// [`resize`](Self::resize) before mapping any pointer position.
    pub fn new() -> Self {
        let mut view = Self {
            center: Vec2::zero(),
            right: Vec2::new(1.0, 0.0),
            viewport: Viewport::new(1.0, 1.0),
            matrix: ViewMatrix::IDENTITY,
        };
        view.update_matrix();
        view
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn right(&self) -> Vec2 {
        self.right
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn matrix(&self) -> ViewMatrix {
        self.matrix
    }

    /// Stores the new viewport size (logical px) and recomputes the matrix.
    ///
    /// Zero-area or non-finite sizes (minimized window) are ignored and the
    /// previous matrix is kept. Returns whether the size was applied.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            log::trace!("ignoring degenerate viewport {width}x{height}");
            return false;
        }
        self.viewport = viewport;
        self.update_matrix();
        true
    }

    /// Replaces both view vectors. `right` must be a finite, non-zero vector.
    pub fn set_view(&mut self, center: Vec2, right: Vec2) {
        assert!(
            center.is_finite() && right.is_finite() && right.length_squared() > 0.0,
            "degenerate view: center {center:?}, right {right:?}"
        );
        self.center = center;
        self.right = right;
        self.update_matrix();
    }

    /// Pans by a pixel delta (screen space, +y down).
    ///
    /// Moves `center` in NDC units, so panning speed does not depend on the
    /// view's rotation or scale.
    pub fn pan_by_pixels(&mut self, delta: Vec2) {
        self.center.x += 2.0 * delta.x / self.viewport.width;
        self.center.y -= 2.0 * delta.y / self.viewport.height;
        self.update_matrix();
    }

    /// Pixel position (origin top-left, +y down) to NDC (+y up).
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        let ndc_x = 2.0 * screen.x / self.viewport.width - 1.0;
        let ndc_y = 2.0 * screen.y / self.viewport.height - 1.0;
        Vec2::new(ndc_x, -ndc_y)
    }

    pub fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc.y) * 0.5 * self.viewport.height,
        )
    }

    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        self.matrix
            .inverse_transform_point(self.screen_to_ndc(screen))
            .expect("view basis is non-singular by construction")
    }

    /// `ndc = [c0 c1] * p + c2`, the same mapping the line shader applies.
    #[inline]
    pub fn canvas_to_ndc(&self, canvas: Vec2) -> Vec2 {
        self.matrix.transform_point(canvas)
    }

    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        self.ndc_to_screen(self.canvas_to_ndc(canvas))
    }

    fn update_matrix(&mut self) {
        let aspect = self.viewport.aspect_ratio();
        let r = self.right;
        self.matrix = ViewMatrix::from_cols(
            Vec2::new(r.x, r.y * aspect),
            Vec2::new(-r.y, r.x * aspect),
            self.center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Vec2, b: Vec2, tol: f32) {
        assert!(
            (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol,
            "{a:?} != {b:?} (tol {tol})"
        );
    }

    fn view(width: f32, height: f32) -> ViewTransform {
        let mut v = ViewTransform::new();
        assert!(v.resize(width, height));
        v
    }

    // ── matrix ────────────────────────────────────────────────────────────

    #[test]
    fn matrix_scales_y_by_aspect() {
        let v = view(800.0, 400.0);
        let m = v.matrix();
        assert_eq!(m.cols[0], Vec2::new(1.0, 0.0));
        assert_eq!(m.cols[1], Vec2::new(0.0, 2.0));
        assert_eq!(m.cols[2], Vec2::zero());
    }

    #[test]
    fn degenerate_resize_keeps_previous_matrix() {
        let mut v = view(800.0, 600.0);
        let before = v.matrix();
        assert!(!v.resize(800.0, 0.0));
        assert!(!v.resize(0.0, 0.0));
        assert_eq!(v.matrix(), before);
        assert_eq!(v.viewport(), Viewport::new(800.0, 600.0));
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn screen_center_is_canvas_origin() {
        let v = view(800.0, 600.0);
        assert_near(v.screen_to_canvas(Vec2::new(400.0, 300.0)), Vec2::zero(), 1e-6);
    }

    #[test]
    fn screen_y_points_down() {
        let v = view(600.0, 600.0);
        // Top edge of the window is canvas y = +1 in an unpanned square view.
        assert_near(v.screen_to_canvas(Vec2::new(300.0, 0.0)), Vec2::new(0.0, 1.0), 1e-6);
        assert_near(v.screen_to_canvas(Vec2::new(600.0, 600.0)), Vec2::new(1.0, -1.0), 1e-6);
    }

    #[test]
    fn round_trip_over_views() {
        let sizes = [(800.0, 600.0), (600.0, 800.0), (1920.0, 1080.0), (333.0, 777.0)];
        let views = [
            (Vec2::zero(), Vec2::new(1.0, 0.0)),
            (Vec2::new(0.3, -0.7), Vec2::new(1.0, 0.0)),
            (Vec2::new(-0.2, 0.1), Vec2::new(0.6, 0.8)),
            (Vec2::new(1.5, 2.0), Vec2::new(-2.0, 0.5)),
            (Vec2::new(0.0, 0.0), Vec2::new(0.05, -0.02)),
        ];

        for &(w, h) in &sizes {
            for &(center, right) in &views {
                let mut v = view(w, h);
                v.set_view(center, right);
                for i in 0..=4 {
                    for j in 0..=4 {
                        let p = Vec2::new(w * i as f32 / 4.0, h * j as f32 / 4.0);
                        let back = v.canvas_to_screen(v.screen_to_canvas(p));
                        assert_near(back, p, 1e-2);
                    }
                }
            }
        }
    }

    #[test]
    fn canvas_round_trip() {
        let mut v = view(1024.0, 768.0);
        v.set_view(Vec2::new(0.1, 0.2), Vec2::new(0.8, 0.6));
        let p = Vec2::new(0.37, -0.81);
        assert_near(v.screen_to_canvas(v.canvas_to_screen(p)), p, 1e-5);
    }

    // ── pan ───────────────────────────────────────────────────────────────

    #[test]
    fn pan_moves_center_in_ndc() {
        let mut v = view(800.0, 600.0);
        v.pan_by_pixels(Vec2::new(40.0, 30.0));
        assert_near(v.center(), Vec2::new(0.1, -0.1), 1e-6);
        assert_eq!(v.matrix().translation(), v.center());
    }

    #[test]
    fn pan_keeps_grabbed_point_under_pointer() {
        let mut v = view(800.0, 600.0);
        v.set_view(Vec2::zero(), Vec2::new(0.6, 0.8));
        let grab = Vec2::new(250.0, 410.0);
        let canvas = v.screen_to_canvas(grab);
        let delta = Vec2::new(-35.0, 12.0);
        v.pan_by_pixels(delta);
        assert_near(v.canvas_to_screen(canvas), grab + delta, 1e-3);
    }

    #[test]
    #[should_panic]
    fn zero_right_vector_panics() {
        let mut v = ViewTransform::new();
        v.set_view(Vec2::zero(), Vec2::zero());
    }
}
