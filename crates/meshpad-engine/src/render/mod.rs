//! GPU rendering subsystem.
//!
//! Renderers read a [`GraphView`] snapshot each frame and issue GPU commands
//! via wgpu. Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - vertex positions are uploaded in canvas space, untouched;
//! - the vertex shader applies the 3×2 view matrix, the same one the editor
//!   inverts for picking.

mod common;
mod ctx;
mod graph_view;
mod lines;
mod markers;

pub use ctx::{RenderCtx, RenderTarget};
pub use graph_view::GraphView;
pub use lines::LineRenderer;
pub use markers::{MarkerRenderer, MarkerStyle};
