//! Coordinate and geometry types shared between the renderers and the editor.
//!
//! Screen space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Canvas space is whatever the editor stores vertex positions in; the
//! `ViewMatrix` maps it to NDC and the line/marker shaders apply that same
//! matrix, so CPU picking and GPU drawing agree.

mod vec2;
mod view_matrix;
mod viewport;

pub use vec2::Vec2;
pub use view_matrix::ViewMatrix;
pub use viewport::Viewport;
