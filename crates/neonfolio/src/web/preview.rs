//! Hover preview drawn on an overlay canvas.
//!
//! The page forwards row enter/leave and pointer motion; the overlay owns the
//! [`PreviewMenu`] timers and redraws whenever the page calls `render`.

use std::time::Duration;

use neonfolio_shared::MAX_FRAME_DELTA;
use neonfolio_ui::{CommandBuffer, DrawSurface, PreviewMenu, Viewport};
use web_sys::{HtmlCanvasElement, Window};

use super::host::viewport_of;
use super::CanvasSurface;

/// Largest pixel ratio the overlay renders at.
const MAX_DPR: f32 = 2.0;

/// Converts a `performance.now()` style timestamp. Bad input reads as zero.
pub(crate) fn from_millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or_default()
}

/// A [`PreviewMenu`] bound to a canvas.
pub struct PreviewOverlay {
    window: Window,
    menu: PreviewMenu,
    surface: CanvasSurface,
    commands: CommandBuffer,
    viewport: Viewport,
    last_render: Option<Duration>,
}

impl PreviewOverlay {
    /// Binds `menu` to `canvas`.
    #[must_use]
    pub fn new(window: Window, canvas: HtmlCanvasElement, menu: PreviewMenu) -> Self {
        Self {
            window,
            menu,
            surface: CanvasSurface::new(canvas),
            commands: CommandBuffer::new(),
            viewport: Viewport::new(0.0, 0.0),
            last_render: None,
        }
    }

    /// The hover state machine.
    #[must_use]
    pub fn menu(&self) -> &PreviewMenu {
        &self.menu
    }

    /// Mutable access for forwarding row events.
    pub fn menu_mut(&mut self) -> &mut PreviewMenu {
        &mut self.menu
    }

    /// Fires due timers, advances the fade and redraws.
    ///
    /// Returns true while anything is still moving, so the caller knows
    /// whether to request another frame.
    pub fn render(&mut self, now: Duration) -> bool {
        self.menu.tick(now);

        let dt = self
            .last_render
            .map_or(0.0, |last| now.saturating_sub(last).as_secs_f32())
            .min(MAX_FRAME_DELTA);
        self.last_render = Some(now);
        self.menu.advance(dt);

        let viewport = viewport_of(&self.window, self.surface.canvas());
        if viewport != self.viewport {
            self.viewport = viewport;
            if !viewport.is_empty() {
                let dpr = viewport.clamped_dpr(MAX_DPR);
                self.surface.resize(viewport.width, viewport.height, dpr);
            }
        }
        if self.viewport.is_empty() || !self.surface.is_available() {
            return false;
        }

        self.commands.begin_frame();
        self.menu.render(&self.viewport, &mut self.commands);
        self.surface.clear();
        self.commands.replay(&mut self.surface);

        self.menu.next_deadline().is_some() || !self.menu.is_settled()
    }
}
