//! Drawing the network into a command buffer.

use std::time::Duration;

use neonfolio_shared::Vec2;
use neonfolio_ui::{Color, CommandBuffer, GradientStop, Rect, RenderCommand};

use crate::config::NetworkConfig;
use crate::particle::Particle;
use crate::simulation::falloff;

/// Everything one frame draws, borrowed from the component.
#[derive(Debug, Clone, Copy)]
pub struct NetworkFrame<'a> {
    /// Particles after this frame's step.
    pub particles: &'a [Particle],
    /// Last pointer position, if any.
    pub pointer: Option<Vec2>,
    /// Surface size in CSS pixels.
    pub size: Vec2,
    /// Resolved particle link distance.
    pub connection_distance: f32,
    /// Time since mount; drives the pointer pulse.
    pub elapsed: Duration,
}

/// Radius of the pulsing pointer indicator at `elapsed`.
#[must_use]
pub fn pulse_radius(elapsed: Duration) -> f32 {
    let millis = elapsed.as_secs_f64() * 1000.0;
    (8.0 + 3.0 * (millis * 0.003).sin()) as f32
}

/// Emits one full frame: clear, background, particles, links, pointer.
pub fn draw(frame: &NetworkFrame<'_>, config: &NetworkConfig, commands: &mut CommandBuffer) {
    commands.push(RenderCommand::Clear);

    if let Some(background) = config.background {
        commands.push(RenderCommand::GradientRect {
            bounds: Rect::new(0.0, 0.0, frame.size.x, frame.size.y),
            corner_radius: background
                .corner_radius
                .min(frame.size.x * 0.5)
                .min(frame.size.y * 0.5),
            stops: [
                GradientStop::new(0.0, background.from),
                GradientStop::new(1.0, background.to),
            ],
        });
    }

    for particle in frame.particles {
        let color = config.color(particle.color);
        commands.push(RenderCommand::Glow {
            center: particle.position,
            radius: particle.radius * config.glow_scale,
            color: color.with_alpha(config.glow_opacity * particle.opacity),
        });
        commands.push(RenderCommand::Circle {
            center: particle.position,
            radius: particle.radius,
            color: color.with_alpha(particle.opacity),
        });
    }

    if config.show_lines {
        draw_links(frame, config, commands);
    }

    if config.show_pointer {
        if let Some(pointer) = frame.pointer {
            draw_pointer(frame, pointer, config, commands);
        }
    }
}

fn draw_links(frame: &NetworkFrame<'_>, config: &NetworkConfig, commands: &mut CommandBuffer) {
    let threshold = frame.connection_distance;
    for (i, a) in frame.particles.iter().enumerate() {
        for b in &frame.particles[i + 1..] {
            let Some(fade) = falloff(a.position.distance(b.position), threshold) else {
                continue;
            };
            commands.push(RenderCommand::Line {
                from: a.position,
                to: b.position,
                color: config.color(a.color).with_alpha(fade * config.line_opacity),
                width: 1.0,
            });
        }
    }
}

fn draw_pointer(
    frame: &NetworkFrame<'_>,
    pointer: Vec2,
    config: &NetworkConfig,
    commands: &mut CommandBuffer,
) {
    let color = config.color(0);

    for particle in frame.particles {
        let Some(fade) = falloff(particle.position.distance(pointer), config.attraction_radius)
        else {
            continue;
        };
        commands.push(RenderCommand::Line {
            from: particle.position,
            to: pointer,
            color: color.with_alpha(fade * config.pointer_line_opacity),
            width: 2.0,
        });
    }

    let pulse = pulse_radius(frame.elapsed);
    commands.push(RenderCommand::Glow {
        center: pointer,
        radius: pulse + 15.0,
        color: color.with_alpha(0.8),
    });
    commands.push(RenderCommand::Circle {
        center: pointer,
        radius: pulse,
        color: color.with_alpha(0.8),
    });
    commands.push(RenderCommand::Circle {
        center: pointer,
        radius: 4.0,
        color: Color { a: 1.0, ..color },
    });
}
