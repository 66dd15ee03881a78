//! The host seam: whatever owns the event loop (a browser window, a test).

use neonfolio_ui::Viewport;

/// Opaque handle of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Event subscriptions a mounted network holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer movement anywhere over the page.
    PointerMove,
    /// Surface size changes.
    Resize,
    /// Surface scrolled into or out of view.
    Visibility,
}

/// Event loop, scheduler and layout source for one mounted component.
///
/// The host delivers events by calling the component's methods
/// (`pointer_moved`, `resized`, `visibility_changed`, `frame`); this trait
/// only covers the calls going the other way.
pub trait Host {
    /// Subscription guard. Dropping it unsubscribes.
    type Listener;

    /// Current surface size and pixel ratio.
    fn viewport(&self) -> Viewport;

    /// Subscribes to `kind` events.
    fn listen(&mut self, kind: ListenerKind) -> Self::Listener;

    /// Schedules one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a scheduled frame callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
