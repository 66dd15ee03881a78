//! Particles and seeding.

use neonfolio_shared::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::NetworkConfig;

/// RNG used for seeding particle fields.
pub type ParticleRng = ChaCha8Rng;

/// A simulated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface space.
    pub position: Vec2,
    /// Velocity in pixels per 60 Hz frame.
    pub velocity: Vec2,
    /// Undisturbed drift the velocity relaxes back to.
    pub home_velocity: Vec2,
    /// Resting radius.
    pub base_radius: f32,
    /// Current (animated) radius.
    pub radius: f32,
    /// Resting opacity.
    pub home_opacity: f32,
    /// Current (animated) opacity.
    pub opacity: f32,
    /// Index into the palette.
    pub color: usize,
}

impl Particle {
    /// Creates a particle at rest on its home values.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            home_velocity: velocity,
            base_radius: radius,
            radius,
            home_opacity: opacity,
            opacity,
            color: 0,
        }
    }

    /// Draws a random particle inside `size`.
    pub fn random<R: Rng>(rng: &mut R, size: Vec2, config: &NetworkConfig) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.drift_speed,
            (rng.gen::<f32>() - 0.5) * config.drift_speed,
        );
        let radius = config.particle_size + rng.gen::<f32>() * config.size_jitter;
        let opacity = (config.base_opacity + rng.gen::<f32>() * config.opacity_jitter).min(1.0);

        let mut particle = Self::new(position, velocity, radius, opacity);
        particle.color = rng.gen_range(0..config.palette.len().max(1));
        particle
    }
}

/// Replaces `particles` with `count` fresh ones inside `size`.
pub fn reseed<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    count: usize,
    size: Vec2,
    config: &NetworkConfig,
) {
    particles.clear();
    particles.reserve(count);
    particles.extend((0..count).map(|_| Particle::random(rng, size, config)));
}

/// Deterministic RNG for a seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> ParticleRng {
    ParticleRng::seed_from_u64(seed)
}

/// RNG seeded from OS (or browser) entropy.
///
/// Falls back to a fixed seed if no entropy source is available.
#[must_use]
pub fn entropy_rng() -> ParticleRng {
    let mut seed = [0u8; 32];
    if let Err(err) = getrandom::fill(&mut seed) {
        tracing::warn!("No entropy source ({}), using fixed particle seed", err);
        return seeded_rng(0x5EED_F1E1D);
    }
    ParticleRng::from_seed(seed)
}
