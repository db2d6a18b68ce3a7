//! meshpad engine crate.
//!
//! Owns the platform + GPU runtime pieces the editor runs on: window and
//! event loop, GPU surface, platform-agnostic input, and the renderers that
//! draw the edited graph.

pub mod core;
pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
