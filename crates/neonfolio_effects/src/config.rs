//! # Network Configuration
//!
//! Every field has a default, so a site config may name only what it changes.
//! Two presets cover the site's two backgrounds: the full-page pointer
//! network ([`NetworkConfig::default`]) and the small self-contained neon
//! panel ([`NetworkConfig::neon_panel`]).

use neonfolio_shared::MAX_PARTICLES;
use neonfolio_ui::{Color, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How many particles to seed. Never more than [`MAX_PARTICLES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleCount {
    /// Always this many.
    Fixed(usize),
    /// `max(min, floor(min_side * per_min_side * 0.1))`, capped at
    /// [`MAX_PARTICLES`].
    Density {
        /// Particles per 1% of the shorter side.
        per_min_side: f32,
        /// Lower bound.
        min: usize,
    },
}

impl ParticleCount {
    /// Particle count for a viewport.
    #[must_use]
    pub fn resolve(&self, viewport: &Viewport) -> usize {
        match *self {
            Self::Fixed(count) => count.min(MAX_PARTICLES),
            Self::Density { per_min_side, min } => {
                let scaled = (viewport.min_side() * per_min_side * 0.1).floor().max(0.0);
                (scaled as usize).max(min).min(MAX_PARTICLES)
            }
        }
    }
}

/// What happens at the surface edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBehavior {
    /// Leave one side, reappear on the other, `margin` pixels off-surface.
    Wrap {
        /// Off-surface distance before wrapping.
        margin: f32,
    },
    /// Reflect off the edges.
    Bounce,
}

/// Maximum distance at which two particles are linked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionDistance {
    /// Absolute distance in CSS pixels.
    Fixed(f32),
    /// Fraction of the shorter surface side.
    RelativeToMinSide(f32),
}

impl ConnectionDistance {
    /// Threshold in CSS pixels for a viewport.
    #[must_use]
    pub fn resolve(&self, viewport: &Viewport) -> f32 {
        match *self {
            Self::Fixed(distance) => distance,
            Self::RelativeToMinSide(fraction) => viewport.min_side() * fraction,
        }
    }

    fn value(&self) -> f32 {
        match *self {
            Self::Fixed(value) | Self::RelativeToMinSide(value) => value,
        }
    }
}

/// Rounded gradient fill drawn under the particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Top-left color.
    pub from: Color,
    /// Bottom-right color.
    pub to: Color,
    /// Corner radius.
    #[serde(default)]
    pub corner_radius: f32,
}

impl Background {
    /// Faint pink-to-cyan wash.
    #[must_use]
    pub fn neon() -> Self {
        Self {
            from: Color::NEON_PINK.with_alpha(0.10),
            to: Color::NEON_CYAN.with_alpha(0.08),
            corner_radius: 10.0,
        }
    }
}

/// Particle network tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Particle count policy.
    pub count: ParticleCount,
    /// Seeded velocity components lie in `[-speed/2, speed/2]`.
    pub drift_speed: f32,
    /// Base radius before jitter.
    pub particle_size: f32,
    /// Each particle adds `U[0, size_jitter)` to its base radius.
    pub size_jitter: f32,
    /// Radius multiplier while attracted.
    pub magnify: f32,
    /// Resting opacity before jitter.
    pub base_opacity: f32,
    /// Each particle adds `U[0, opacity_jitter)` to its resting opacity.
    pub opacity_jitter: f32,
    /// Pointer influence radius.
    pub attraction_radius: f32,
    /// Velocity gained per frame at full strength.
    pub attraction_force: f32,
    /// Per-frame easing toward the magnified look while attracted.
    pub approach_smoothing: f32,
    /// Per-frame easing back to the home velocity.
    pub return_smoothing: f32,
    /// Per-frame easing back to the resting radius and opacity.
    pub size_return_smoothing: f32,
    /// Per-component velocity clamp.
    pub max_velocity: f32,
    /// Edge handling.
    pub edge: EdgeBehavior,
    /// Link distance policy.
    pub connection: ConnectionDistance,
    /// Peak alpha of particle-particle links.
    pub line_opacity: f32,
    /// Peak alpha of particle-pointer links.
    pub pointer_line_opacity: f32,
    /// Particle colors.
    pub palette: Vec<Color>,
    /// Glow radius as a multiple of the particle radius.
    pub glow_scale: f32,
    /// Glow alpha at its center, multiplied by the particle opacity.
    pub glow_opacity: f32,
    /// Draw particle-particle links.
    pub show_lines: bool,
    /// Draw pointer links and the pointer pulse.
    pub show_pointer: bool,
    /// Listen to the pointer at all.
    pub track_pointer: bool,
    /// Optional gradient fill.
    pub background: Option<Background>,
    /// When false, draw once per resize/visibility change and stop.
    pub animate: bool,
    /// Upper bound for the device pixel ratio.
    pub max_device_pixel_ratio: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            count: ParticleCount::Fixed(60),
            drift_speed: 0.3,
            particle_size: 2.5,
            size_jitter: 1.0,
            magnify: 2.0,
            base_opacity: 0.6,
            opacity_jitter: 0.4,
            attraction_radius: 180.0,
            attraction_force: 0.015,
            approach_smoothing: 0.1,
            return_smoothing: 0.03,
            size_return_smoothing: 0.05,
            max_velocity: 1.0,
            edge: EdgeBehavior::Wrap { margin: 10.0 },
            connection: ConnectionDistance::Fixed(140.0),
            line_opacity: 0.25,
            pointer_line_opacity: 0.6,
            palette: vec![Color::NEON_PINK],
            glow_scale: 3.0,
            glow_opacity: 0.5,
            show_lines: true,
            show_pointer: true,
            track_pointer: true,
            background: None,
            animate: true,
            max_device_pixel_ratio: 2.0,
        }
    }
}

impl NetworkConfig {
    /// Self-contained neon panel: density-scaled, bouncing, three-color,
    /// no pointer interaction, gradient wash underneath.
    #[must_use]
    pub fn neon_panel() -> Self {
        Self {
            count: ParticleCount::Density {
                per_min_side: 0.6,
                min: 4,
            },
            particle_size: 1.2,
            size_jitter: 2.2,
            base_opacity: 0.9,
            opacity_jitter: 0.0,
            edge: EdgeBehavior::Bounce,
            connection: ConnectionDistance::RelativeToMinSide(0.35),
            line_opacity: 0.2,
            palette: vec![Color::NEON_PINK, Color::NEON_VIOLET, Color::NEON_CYAN],
            glow_scale: 6.0,
            show_pointer: false,
            track_pointer: false,
            background: Some(Background::neon()),
            ..Self::default()
        }
    }

    /// Checks every value the simulation relies on.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("drift_speed", self.drift_speed),
            ("particle_size", self.particle_size),
            ("size_jitter", self.size_jitter),
            ("magnify", self.magnify),
            ("base_opacity", self.base_opacity),
            ("opacity_jitter", self.opacity_jitter),
            ("attraction_radius", self.attraction_radius),
            ("attraction_force", self.attraction_force),
            ("max_velocity", self.max_velocity),
            ("connection", self.connection.value()),
            ("line_opacity", self.line_opacity),
            ("pointer_line_opacity", self.pointer_line_opacity),
            ("glow_scale", self.glow_scale),
            ("glow_opacity", self.glow_opacity),
            ("max_device_pixel_ratio", self.max_device_pixel_ratio),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        if let EdgeBehavior::Wrap { margin } = self.edge {
            if !margin.is_finite() || margin < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field: "edge.margin",
                    value: margin,
                });
            }
        }
        match self.count {
            ParticleCount::Fixed(count) if count > MAX_PARTICLES => {
                return Err(ConfigError::OutOfRange {
                    field: "count",
                    value: count as f32,
                });
            }
            ParticleCount::Density { per_min_side, .. }
                if !per_min_side.is_finite() || per_min_side < 0.0 =>
            {
                return Err(ConfigError::OutOfRange {
                    field: "count.per_min_side",
                    value: per_min_side,
                });
            }
            ParticleCount::Density { min, .. } if min > MAX_PARTICLES => {
                return Err(ConfigError::OutOfRange {
                    field: "count.min",
                    value: min as f32,
                });
            }
            _ => {}
        }

        if self.attraction_radius <= 0.0 {
            return Err(ConfigError::ZeroAttractionRadius(self.attraction_radius));
        }

        let smoothing = [
            ("approach_smoothing", self.approach_smoothing),
            ("return_smoothing", self.return_smoothing),
            ("size_return_smoothing", self.size_return_smoothing),
        ];
        for (field, value) in smoothing {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::BadSmoothing { field, value });
            }
        }

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Palette color for an index, wrapping around.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return Color::NEON_PINK;
        }
        self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NetworkConfig::default().validate().is_ok());
        assert!(NetworkConfig::neon_panel().validate().is_ok());
    }

    #[test]
    fn test_density_count() {
        let count = NetworkConfig::neon_panel().count;
        // floor(200 * 0.6 * 0.1) = 12
        assert_eq!(count.resolve(&Viewport::new(300.0, 200.0)), 12);
        // Tiny panels keep the floor of 4
        assert_eq!(count.resolve(&Viewport::new(40.0, 30.0)), 4);
    }

    #[test]
    fn test_density_count_is_capped() {
        let dense = ParticleCount::Density {
            per_min_side: 1e6,
            min: 4,
        };
        // Uncapped this would be 108_000_000
        assert_eq!(dense.resolve(&Viewport::new(1920.0, 1080.0)), MAX_PARTICLES);

        let config = NetworkConfig {
            count: dense,
            ..NetworkConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_oversized_count_rejected() {
        let crowded = NetworkConfig {
            count: ParticleCount::Fixed(1_000_000),
            ..NetworkConfig::default()
        };
        assert_eq!(
            crowded.validate(),
            Err(ConfigError::OutOfRange {
                field: "count",
                value: 1_000_000.0,
            })
        );

        let at_cap = NetworkConfig {
            count: ParticleCount::Fixed(MAX_PARTICLES),
            ..NetworkConfig::default()
        };
        assert!(at_cap.validate().is_ok());

        let high_floor = NetworkConfig {
            count: ParticleCount::Density {
                per_min_side: 0.5,
                min: MAX_PARTICLES + 1,
            },
            ..NetworkConfig::default()
        };
        assert!(matches!(
            high_floor.validate(),
            Err(ConfigError::OutOfRange { field: "count.min", .. })
        ));
    }

    #[test]
    fn test_relative_connection_distance() {
        let distance = ConnectionDistance::RelativeToMinSide(0.35);
        let resolved = distance.resolve(&Viewport::new(800.0, 200.0));
        assert!((resolved - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_radius = NetworkConfig {
            attraction_radius: 0.0,
            ..NetworkConfig::default()
        };
        assert_eq!(
            zero_radius.validate(),
            Err(ConfigError::ZeroAttractionRadius(0.0))
        );

        let nan_speed = NetworkConfig {
            drift_speed: f32::NAN,
            ..NetworkConfig::default()
        };
        assert!(matches!(
            nan_speed.validate(),
            Err(ConfigError::OutOfRange { field: "drift_speed", .. })
        ));

        let stuck = NetworkConfig {
            return_smoothing: 0.0,
            ..NetworkConfig::default()
        };
        assert!(matches!(
            stuck.validate(),
            Err(ConfigError::BadSmoothing { field: "return_smoothing", .. })
        ));

        let colorless = NetworkConfig {
            palette: Vec::new(),
            ..NetworkConfig::default()
        };
        assert_eq!(colorless.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: NetworkConfig = toml::from_str(
            r##"
            attraction_radius = 220.0
            edge = "bounce"
            palette = ["#ff2bb3", "#29ffe3"]
            count = { density = { per_min_side = 0.5, min = 8 } }
            "##,
        )
        .unwrap();

        assert_eq!(config.attraction_radius, 220.0);
        assert_eq!(config.edge, EdgeBehavior::Bounce);
        assert_eq!(config.palette.len(), 2);
        assert_eq!(
            config.count,
            ParticleCount::Density {
                per_min_side: 0.5,
                min: 8
            }
        );
        assert_eq!(config.line_opacity, 0.25);
    }
}
