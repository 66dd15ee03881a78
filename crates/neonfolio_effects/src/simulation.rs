//! # Particle Simulation
//!
//! One pure step: `(particles, pointer, dt, size, config) -> particles'`.
//! No drawing, no host access, no randomness.
//!
//! All tunables are expressed per 60 Hz frame. A step of `dt` seconds counts
//! as `dt * 60` frames, and per-frame smoothing factors are converted with
//! `1 - (1 - f)^frames` so a 30 Hz host ends up where a 60 Hz host does.

use neonfolio_shared::{Vec2, FRAME_RATE, MAX_FRAME_DELTA};

use crate::config::{EdgeBehavior, NetworkConfig};
use crate::particle::Particle;

/// Number of 60 Hz frames in `dt` seconds, after clamping `dt`.
#[must_use]
pub fn frames_for(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DELTA) * FRAME_RATE
    } else {
        0.0
    }
}

/// Per-frame smoothing factor stretched over `frames` frames.
#[must_use]
pub fn smoothing(factor: f32, frames: f32) -> f32 {
    1.0 - (1.0 - factor.clamp(0.0, 1.0)).powf(frames)
}

/// Linear fade factor for a link of length `distance`: 1 at zero length,
/// 0 at `threshold`. `None` at or beyond the threshold.
#[must_use]
pub fn falloff(distance: f32, threshold: f32) -> Option<f32> {
    if threshold > 0.0 && distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

/// Pointer pull on one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    /// Unit vector toward the pointer (zero when on top of it).
    pub direction: Vec2,
    /// `(radius - distance) / radius`, in `(0, 1]`.
    pub strength: f32,
    /// Distance to the pointer.
    pub distance: f32,
}

/// Pull exerted by `pointer` on a particle at `position`, if within `radius`.
#[must_use]
pub fn attraction(position: Vec2, pointer: Vec2, radius: f32) -> Option<Attraction> {
    let offset = pointer - position;
    let distance = offset.length();
    let strength = falloff(distance, radius)?;
    Some(Attraction {
        direction: offset.normalize_or_zero(),
        strength: strength.min(1.0),
        distance,
    })
}

/// Advances every particle by `dt` seconds inside a `size` surface.
pub fn step(
    particles: &mut [Particle],
    pointer: Option<Vec2>,
    dt: f32,
    size: Vec2,
    config: &NetworkConfig,
) {
    let frames = frames_for(dt);
    if frames <= 0.0 {
        return;
    }

    let approach = smoothing(config.approach_smoothing, frames);
    let settle = smoothing(config.return_smoothing, frames);
    let shrink = smoothing(config.size_return_smoothing, frames);

    for particle in particles.iter_mut() {
        let pull = pointer.and_then(|p| attraction(particle.position, p, config.attraction_radius));

        if let Some(pull) = pull {
            particle.velocity += pull.direction * (pull.strength * config.attraction_force * frames);
            particle.radius = ease(particle.radius, particle.base_radius * config.magnify, approach);
            particle.opacity = ease(particle.opacity, 1.0, approach);
        } else {
            particle.velocity = particle.velocity.approach(particle.home_velocity, settle);
            particle.radius = ease(particle.radius, particle.base_radius, shrink);
            particle.opacity = ease(particle.opacity, particle.home_opacity, shrink);
        }

        particle.velocity = particle.velocity.clamp_components(config.max_velocity);
        particle.position += particle.velocity * frames;

        match config.edge {
            EdgeBehavior::Wrap { margin } => wrap(particle, size, margin),
            EdgeBehavior::Bounce => bounce(particle, size),
        }
    }
}

#[inline]
fn ease(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

fn wrap(particle: &mut Particle, size: Vec2, margin: f32) {
    let wrap_axis = |value: f32, extent: f32| {
        if value < -margin {
            extent + margin
        } else if value > extent + margin {
            -margin
        } else {
            value
        }
    };
    particle.position.x = wrap_axis(particle.position.x, size.x);
    particle.position.y = wrap_axis(particle.position.y, size.y);
}

fn bounce(particle: &mut Particle, size: Vec2) {
    // Signs are forced rather than flipped so a particle pushed far out
    // cannot oscillate across the edge
    if particle.position.x < 0.0 {
        particle.position.x = 0.0;
        particle.velocity.x = particle.velocity.x.abs();
        particle.home_velocity.x = particle.home_velocity.x.abs();
    } else if particle.position.x > size.x {
        particle.position.x = size.x;
        particle.velocity.x = -particle.velocity.x.abs();
        particle.home_velocity.x = -particle.home_velocity.x.abs();
    }

    if particle.position.y < 0.0 {
        particle.position.y = 0.0;
        particle.velocity.y = particle.velocity.y.abs();
        particle.home_velocity.y = particle.home_velocity.y.abs();
    } else if particle.position.y > size.y {
        particle.position.y = size.y;
        particle.velocity.y = -particle.velocity.y.abs();
        particle.home_velocity.y = -particle.home_velocity.y.abs();
    }
}
