//! Layout system for viewport-relative positioning.

use neonfolio_shared::{Vec2, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

/// A rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns a copy moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns a copy scaled by `factor` around its center.
    #[must_use]
    pub fn scale_about_center(&self, factor: f32) -> Self {
        let c = self.center();
        let w = self.width * factor;
        let h = self.height * factor;
        Self::new(c.x - w * 0.5, c.y - h * 0.5, w, h)
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }
}

/// Viewport size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
    /// Device pixel ratio reported by the host.
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Creates a viewport at 1x pixel ratio.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Sets the device pixel ratio.
    #[must_use]
    pub const fn with_device_pixel_ratio(mut self, dpr: f32) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    /// Returns true when there is nothing to draw into (not yet laid out).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width >= 1.0 && self.height >= 1.0)
    }

    /// Shorter side, in CSS pixels.
    #[must_use]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Device pixel ratio clamped to `[1, max]`.
    #[must_use]
    pub fn clamped_dpr(&self, max: f32) -> f32 {
        if self.device_pixel_ratio.is_finite() {
            self.device_pixel_ratio.clamp(1.0, max.max(1.0))
        } else {
            1.0
        }
    }

    /// Bounds rectangle at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Responsive breakpoint for this width.
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }
}

/// Responsive layout class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Narrower than 768px.
    Mobile,
    /// 768px up to 1024px.
    Tablet,
    /// 1024px and wider.
    Desktop,
}

impl Breakpoint {
    /// Classifies a viewport width.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Vertical stack of full-width rows, as used by the project list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStack {
    /// Row height per breakpoint: mobile, tablet, desktop.
    pub row_heights: [f32; 3],
    /// Gap between rows (divider lines).
    pub gap: f32,
    /// Padding around the stack.
    pub padding: f32,
}

impl Default for RowStack {
    fn default() -> Self {
        Self {
            row_heights: [96.0, 120.0, 144.0],
            gap: 1.0,
            padding: 16.0,
        }
    }
}

impl RowStack {
    /// Lays out `count` rows inside `bounds`.
    ///
    /// Rows stretch to the content width; their height follows the breakpoint
    /// of `viewport`.
    #[must_use]
    pub fn arrange(&self, bounds: Rect, viewport: &Viewport, count: usize) -> Vec<Rect> {
        let height = match viewport.breakpoint() {
            Breakpoint::Mobile => self.row_heights[0],
            Breakpoint::Tablet => self.row_heights[1],
            Breakpoint::Desktop => self.row_heights[2],
        };
        let content = bounds.shrink(self.padding);

        let mut y = content.y;
        (0..count)
            .map(|_| {
                let row = Rect::new(content.x, y, content.width, height);
                y += height + self.gap;
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 80.0)));
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::for_width(375.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_viewport_empty_and_dpr() {
        assert!(Viewport::new(0.0, 600.0).is_empty());
        assert!(!Viewport::new(800.0, 600.0).is_empty());

        let vp = Viewport::new(800.0, 600.0).with_device_pixel_ratio(3.0);
        assert_eq!(vp.clamped_dpr(2.0), 2.0);
        assert_eq!(Viewport::new(1.0, 1.0).with_device_pixel_ratio(0.5).clamped_dpr(2.0), 1.0);
    }

    #[test]
    fn test_row_stack() {
        let stack = RowStack {
            row_heights: [50.0, 60.0, 70.0],
            gap: 1.0,
            padding: 0.0,
        };
        let rows = stack.arrange(Rect::new(0.0, 0.0, 500.0, 1000.0), &Viewport::new(1280.0, 800.0), 3);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].y, 0.0);
        assert_eq!(rows[1].y, 71.0);
        assert_eq!(rows[2].height, 70.0);
        assert_eq!(rows[2].width, 500.0);
    }
}
