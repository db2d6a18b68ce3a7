//! Colors shared between the renderers and the application.

pub mod color;

pub use color::Color;
