//! Floating preview placement.
//!
//! The preview sits beside the pointer, flips to the left side when it would
//! run off the right edge, drops below the pointer when it would run off the
//! top, and never comes closer than `inset` to the left/top edges.

use neonfolio_shared::{Vec2, VIEWPORT_INSET};
use serde::{Deserialize, Serialize};

use crate::layout::{Breakpoint, Rect, Viewport};

/// Preview size and pointer offset for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Preview width.
    pub width: f32,
    /// Preview height.
    pub height: f32,
    /// Horizontal offset from the pointer.
    pub offset_x: f32,
    /// Vertical offset from the pointer.
    pub offset_y: f32,
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(width: f32, height: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            width,
            height,
            offset_x,
            offset_y,
        }
    }
}

/// Placement table for all breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Phones: centered above the pointer.
    pub mobile: Placement,
    /// Tablets.
    pub tablet: Placement,
    /// Desktops.
    pub desktop: Placement,
    /// Minimum distance from the viewport edges.
    pub inset: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            mobile: Placement::new(250.0, 187.0, -125.0, -200.0),
            tablet: Placement::new(280.0, 210.0, 15.0, -160.0),
            desktop: Placement::new(320.0, 240.0, 20.0, -150.0),
            inset: VIEWPORT_INSET,
        }
    }
}

impl PlacementConfig {
    /// Placement entry for a breakpoint.
    #[must_use]
    pub fn for_breakpoint(&self, breakpoint: Breakpoint) -> Placement {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }

    /// Computes the preview rectangle for a pointer position.
    #[must_use]
    pub fn place(&self, pointer: Vec2, viewport: &Viewport) -> Rect {
        let p = self.for_breakpoint(viewport.breakpoint());

        let mut left = pointer.x + p.offset_x;
        let mut top = pointer.y + p.offset_y;

        // Flip to the left of the pointer instead of overflowing the right edge
        if left + p.width > viewport.width - self.inset {
            left = pointer.x - p.width - p.offset_x.abs();
        }
        // Drop below the pointer instead of overflowing the top
        if top < self.inset {
            top = pointer.y + self.inset;
        }

        Rect::new(left.max(self.inset), top.max(self.inset), p.width, p.height)
    }
}
