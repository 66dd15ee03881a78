//! Time-based tweens for the floating preview.
//!
//! A tween moves from where it currently is toward a target over a fixed
//! duration. Retargeting mid-flight restarts from the current value, so a
//! fade interrupted halfway reverses without a jump.

/// Easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// `1 - 2^(-10t)`: most of the distance in the first third.
    #[default]
    ExponentialOut,
}

impl Easing {
    /// Eased progress for `t` in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::ExponentialOut if t >= 1.0 => 1.0,
            Self::ExponentialOut => 1.0 - 2.0_f32.powf(-10.0 * t),
        }
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    value: f32,
    /// Seconds since the last retarget.
    elapsed: f32,
    /// Seconds to reach `to`.
    duration: f32,
    easing: Easing,
}

impl Animation {
    /// Resting at `value`, 0.2 s per transition.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            value,
            elapsed: 0.0,
            duration: 0.2,
            easing,
        }
    }

    /// Same animation with a different transition length (seconds).
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self.elapsed = self.duration;
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns true once the value has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.to
    }

    /// Heads toward `to` from the current value. A no-op if already heading there.
    pub fn animate_to(&mut self, to: f32) {
        if to == self.to {
            return;
        }
        self.from = self.value;
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.is_settled() {
            return;
        }
        self.elapsed += dt.max(0.0);
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            self.value = self.to;
            return;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.value = self.from + (self.to - self.from) * t;
    }
}

/// Show/hide transition for a floating element: opacity, scale and tilt.
///
/// Hidden means transparent, scaled to 75% and tilted by 3 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTransition {
    /// Opacity (0-1).
    pub opacity: Animation,
    /// Uniform scale.
    pub scale: Animation,
    /// Rotation in degrees.
    pub tilt: Animation,
}

impl FadeTransition {
    /// Scale while hidden.
    pub const HIDDEN_SCALE: f32 = 0.75;
    /// Tilt while hidden (degrees).
    pub const HIDDEN_TILT: f32 = 3.0;
    /// Opacity fade duration (seconds).
    pub const FADE_DURATION: f32 = 0.2;
    /// Scale/tilt duration (seconds).
    pub const TRANSFORM_DURATION: f32 = 0.3;

    /// Creates a hidden transition.
    #[must_use]
    pub fn hidden() -> Self {
        let transform = |value| {
            Animation::new(value, Easing::ExponentialOut).with_duration(Self::TRANSFORM_DURATION)
        };
        Self {
            opacity: Animation::new(0.0, Easing::ExponentialOut).with_duration(Self::FADE_DURATION),
            scale: transform(Self::HIDDEN_SCALE),
            tilt: transform(Self::HIDDEN_TILT),
        }
    }

    /// Starts animating toward shown (`true`) or hidden (`false`).
    pub fn set_visible(&mut self, visible: bool) {
        let (opacity, scale, tilt) = if visible {
            (1.0, 1.0, 0.0)
        } else {
            (0.0, Self::HIDDEN_SCALE, Self::HIDDEN_TILT)
        };
        self.opacity.animate_to(opacity);
        self.scale.animate_to(scale);
        self.tilt.animate_to(tilt);
    }

    /// Snaps straight to hidden.
    pub fn reset(&mut self) {
        *self = Self::hidden();
    }

    /// Advances all three channels.
    pub fn update(&mut self, dt: f32) {
        for channel in [&mut self.opacity, &mut self.scale, &mut self.tilt] {
            channel.update(dt);
        }
    }

    /// Returns true if every channel has settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.opacity.is_settled() && self.scale.is_settled() && self.tilt.is_settled()
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::hidden()
    }
}
