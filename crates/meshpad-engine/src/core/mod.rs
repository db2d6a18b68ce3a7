//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: discrete, ordered input/resize callbacks plus a per-frame
//! render callback.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_size;
