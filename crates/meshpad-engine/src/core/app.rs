use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callbacks arrive on the event-loop thread, one at a time, in platform order.
pub trait App {
    /// Called once after the window is created, then on every resize or scale
    /// factor change. Sizes are logical pixels and never zero.
    fn on_resize(&mut self, width: f32, height: f32) {
        let _ = (width, height);
    }

    /// Called for every translated input event, before the next frame.
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
