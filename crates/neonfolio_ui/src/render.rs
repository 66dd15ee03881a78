//! Immediate-mode drawing.
//!
//! Widgets and effects emit [`RenderCommand`]s into a [`CommandBuffer`];
//! the host replays the buffer on its [`DrawSurface`] once per frame.

use neonfolio_shared::Vec2;

use crate::layout::Rect;
use crate::style::Color;

/// One color stop of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0-1).
    pub offset: f32,
    /// Color at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Creates a stop.
    #[must_use]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A render command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear the whole surface to transparent.
    Clear,
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rounded rectangle filled with a diagonal (top-left to bottom-right) gradient.
    GradientRect {
        /// Bounds.
        bounds: Rect,
        /// Corner radius.
        corner_radius: f32,
        /// Start and end stops.
        stops: [GradientStop; 2],
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Soft radial glow: `color` at the center fading to transparent at `radius`.
    Glow {
        /// Center.
        center: Vec2,
        /// Outer radius.
        radius: f32,
        /// Center color.
        color: Color,
    },
    /// Straight stroked line.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Image drawn into a rectangle.
    Image {
        /// Bounds (before rotation).
        bounds: Rect,
        /// Image reference (URL or asset path).
        source: String,
        /// Opacity (0-1).
        opacity: f32,
        /// Rotation about the center, in degrees.
        rotation_deg: f32,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// Top-left position.
        position: Vec2,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
}

impl RenderCommand {
    /// Replays this command on a surface.
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Clear => surface.clear(),
            Self::Rect {
                bounds,
                color,
                corner_radius,
            } => surface.fill_rect(*bounds, *color, *corner_radius),
            Self::GradientRect {
                bounds,
                corner_radius,
                stops,
            } => surface.fill_gradient_rect(*bounds, *corner_radius, stops),
            Self::Circle {
                center,
                radius,
                color,
            } => surface.fill_circle(*center, *radius, *color),
            Self::Glow {
                center,
                radius,
                color,
            } => surface.glow(*center, *radius, *color),
            Self::Line {
                from,
                to,
                color,
                width,
            } => surface.line(*from, *to, *color, *width),
            Self::Image {
                bounds,
                source,
                opacity,
                rotation_deg,
            } => surface.image(*bounds, source, *opacity, *rotation_deg),
            Self::Text {
                text,
                position,
                color,
                font_size,
            } => surface.text(text, *position, *color, *font_size),
        }
    }
}

/// A 2D immediate-mode drawing surface provided by the host.
///
/// All coordinates are CSS pixels; the surface applies the device pixel
/// ratio it was last resized with.
pub trait DrawSurface {
    /// Returns false when the host has no drawing context.
    fn is_available(&self) -> bool {
        true
    }

    /// Resizes the backing store.
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32);

    /// Clears everything.
    fn clear(&mut self);

    /// Fills a (rounded) rectangle.
    fn fill_rect(&mut self, bounds: Rect, color: Color, corner_radius: f32);

    /// Fills a (rounded) rectangle with a diagonal gradient.
    fn fill_gradient_rect(&mut self, bounds: Rect, corner_radius: f32, stops: &[GradientStop; 2]);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draws a radial glow fading to transparent.
    fn glow(&mut self, center: Vec2, radius: f32, color: Color);

    /// Strokes a line.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Draws an image. Loading and decoding are the host's business.
    fn image(&mut self, bounds: Rect, source: &str, opacity: f32, rotation_deg: f32);

    /// Draws text.
    fn text(&mut self, text: &str, position: Vec2, color: Color, font_size: f32);
}

/// Reusable per-frame command list.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<RenderCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    /// Begins a new frame, keeping the allocation.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Commands recorded this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands recorded this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays every command on `surface`.
    ///
    /// Returns false (drawing nothing) when the surface has no context.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> bool {
        if !surface.is_available() {
            return false;
        }
        for command in &self.commands {
            command.apply(surface);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        available: bool,
        clears: usize,
        circles: usize,
        lines: usize,
    }

    impl DrawSurface for CountingSurface {
        fn is_available(&self) -> bool {
            self.available
        }
        fn resize(&mut self, _: f32, _: f32, _: f32) {}
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn fill_rect(&mut self, _: Rect, _: Color, _: f32) {}
        fn fill_gradient_rect(&mut self, _: Rect, _: f32, _: &[GradientStop; 2]) {}
        fn fill_circle(&mut self, _: Vec2, _: f32, _: Color) {
            self.circles += 1;
        }
        fn glow(&mut self, _: Vec2, _: f32, _: Color) {}
        fn line(&mut self, _: Vec2, _: Vec2, _: Color, _: f32) {
            self.lines += 1;
        }
        fn image(&mut self, _: Rect, _: &str, _: f32, _: f32) {}
        fn text(&mut self, _: &str, _: Vec2, _: Color, _: f32) {}
    }

    fn sample_frame() -> CommandBuffer {
        let mut buffer = CommandBuffer::new();
        buffer.begin_frame();
        buffer.push(RenderCommand::Clear);
        buffer.push(RenderCommand::Circle {
            center: Vec2::new(1.0, 1.0),
            radius: 2.0,
            color: Color::WHITE,
        });
        buffer.push(RenderCommand::Line {
            from: Vec2::ZERO,
            to: Vec2::new(5.0, 5.0),
            color: Color::WHITE,
            width: 1.0,
        });
        buffer
    }

    #[test]
    fn test_replay_dispatches_each_command() {
        let buffer = sample_frame();
        let mut surface = CountingSurface {
            available: true,
            ..Default::default()
        };

        assert!(buffer.replay(&mut surface));
        assert_eq!((surface.clears, surface.circles, surface.lines), (1, 1, 1));
    }

    #[test]
    fn test_replay_skips_missing_context() {
        let buffer = sample_frame();
        let mut surface = CountingSurface::default();

        assert!(!buffer.replay(&mut surface));
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_begin_frame_resets() {
        let mut buffer = sample_frame();
        assert_eq!(buffer.len(), 3);
        buffer.begin_frame();
        assert!(buffer.is_empty());
    }
}
