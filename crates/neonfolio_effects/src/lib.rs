//! # NEONFOLIO Effects
//!
//! The pointer-reactive particle network drawn behind the portfolio pages.
//!
//! ## Design Principles
//!
//! 1. **Pure step** - `simulation::step` only touches the particle slice
//! 2. **Frame-rate independent** - tunables are per 60 Hz frame, dt is scaled
//! 3. **Host agnostic** - events come in through method calls, frames and
//!    listeners go out through the [`Host`] trait
//! 4. **Reproducible** - seeded ChaCha fields for tests and screenshots
//!
//! ## Example
//!
//! ```rust,ignore
//! use neonfolio_effects::{NetworkConfig, ParticleNetwork};
//!
//! let mut network = ParticleNetwork::new(host, surface, NetworkConfig::default())?;
//! network.mount();
//!
//! // From the host's event loop:
//! network.pointer_moved(Vec2::new(320.0, 200.0));
//! network.frame(elapsed);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod draw;
pub mod error;
pub mod host;
pub mod network;
pub mod particle;
pub mod simulation;

pub use config::{Background, ConnectionDistance, EdgeBehavior, NetworkConfig, ParticleCount};
pub use draw::{draw, pulse_radius, NetworkFrame};
pub use error::ConfigError;
pub use host::{FrameHandle, Host, ListenerKind};
pub use network::ParticleNetwork;
pub use particle::{entropy_rng, reseed, seeded_rng, Particle, ParticleRng};
pub use simulation::{attraction, falloff, frames_for, smoothing, step, Attraction};
