//! # Particle Network Component
//!
//! Owns the particles, the drawing surface and every host registration of
//! one mounted background.
//!
//! ## Lifecycle
//!
//! ```text
//! new ──mount──► mounted ──frame──► frame ──► ... ──unmount──► unmounted
//!                   │                  ▲
//!                   ├──resized─────────┤   (cancel, resize, reseed, schedule)
//!                   └──visibility──────┘   (pause / resume)
//! ```
//!
//! At most one frame is scheduled at any time. Unmounting (or dropping)
//! cancels it and releases all listeners.

use std::time::Duration;

use neonfolio_shared::Vec2;
use neonfolio_ui::{CommandBuffer, DrawSurface, PointerState, Viewport};

use crate::config::NetworkConfig;
use crate::draw::{draw, NetworkFrame};
use crate::error::ConfigError;
use crate::host::{FrameHandle, Host, ListenerKind};
use crate::particle::{entropy_rng, reseed, seeded_rng, Particle, ParticleRng};
use crate::simulation::step;

/// A mounted (or mountable) particle network background.
pub struct ParticleNetwork<H: Host, S: DrawSurface> {
    host: H,
    surface: S,
    config: NetworkConfig,
    rng: ParticleRng,
    particles: Vec<Particle>,
    pointer: PointerState,
    viewport: Viewport,
    connection_distance: f32,
    listeners: Vec<H::Listener>,
    pending_frame: Option<FrameHandle>,
    last_frame: Option<Duration>,
    mounted: bool,
    visible: bool,
    commands: CommandBuffer,
    frames_drawn: u64,
}

impl<H: Host, S: DrawSurface> ParticleNetwork<H, S> {
    /// Creates an unmounted network seeded from entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(host: H, surface: S, config: NetworkConfig) -> Result<Self, ConfigError> {
        Self::with_rng(host, surface, config, entropy_rng())
    }

    /// Creates an unmounted network with a fixed seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn with_seed(
        host: H,
        surface: S,
        config: NetworkConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(host, surface, config, seeded_rng(seed))
    }

    fn with_rng(
        host: H,
        surface: S,
        config: NetworkConfig,
        rng: ParticleRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            host,
            surface,
            config,
            rng,
            particles: Vec::new(),
            pointer: PointerState::new(),
            viewport: Viewport::new(0.0, 0.0),
            connection_distance: 0.0,
            listeners: Vec::with_capacity(3),
            pending_frame: None,
            last_frame: None,
            mounted: false,
            visible: true,
            commands: CommandBuffer::new(),
            frames_drawn: 0,
        })
    }

    /// Subscribes to host events, sizes the surface and schedules the first frame.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if self.config.track_pointer {
            self.listeners.push(self.host.listen(ListenerKind::PointerMove));
        }
        self.listeners.push(self.host.listen(ListenerKind::Resize));
        self.listeners.push(self.host.listen(ListenerKind::Visibility));

        let viewport = self.host.viewport();
        tracing::debug!(
            "Particle network mounted ({}x{}, {} listeners)",
            viewport.width,
            viewport.height,
            self.listeners.len()
        );
        self.resized(viewport);
    }

    /// Surface size changed: resize the backing store and reseed.
    ///
    /// A zero-area viewport clears the field and waits for a real size.
    pub fn resized(&mut self, viewport: Viewport) {
        self.cancel_pending();
        self.viewport = viewport;

        if viewport.is_empty() {
            self.particles.clear();
            tracing::debug!(
                "Particle network has no area ({}x{}), waiting for layout",
                viewport.width,
                viewport.height
            );
            return;
        }

        let dpr = viewport.clamped_dpr(self.config.max_device_pixel_ratio);
        self.surface.resize(viewport.width, viewport.height, dpr);

        let count = self.config.count.resolve(&viewport);
        let size = Vec2::new(viewport.width, viewport.height);
        reseed(&mut self.particles, &mut self.rng, count, size, &self.config);
        self.connection_distance = self.config.connection.resolve(&viewport);

        tracing::debug!(
            "Reseeded {} particles for {}x{} @{}x",
            count,
            viewport.width,
            viewport.height,
            dpr
        );

        self.schedule();
    }

    /// Records the latest pointer position.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.set(position);
    }

    /// Surface scrolled into or out of view.
    pub fn visibility_changed(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        tracing::debug!("Particle network {}", if visible { "resumed" } else { "paused" });

        self.cancel_pending();
        if visible {
            // Gap since the last frame is not simulated time
            self.last_frame = None;
            self.schedule();
        }
    }

    /// Frame callback: step, draw and schedule the next frame.
    ///
    /// `now` is the host's monotonic clock; only differences between frames
    /// and the pulse phase depend on it.
    pub fn frame(&mut self, now: Duration) {
        self.pending_frame = None;
        if !self.mounted || !self.visible {
            return;
        }
        if self.viewport.is_empty() || !self.surface.is_available() {
            tracing::trace!("Skipping frame: nothing to draw into");
            return;
        }

        let dt = self
            .last_frame
            .map_or(1.0 / 60.0, |last| now.saturating_sub(last).as_secs_f32());
        self.last_frame = Some(now);

        let size = Vec2::new(self.viewport.width, self.viewport.height);
        step(&mut self.particles, self.pointer.position(), dt, size, &self.config);

        self.commands.begin_frame();
        let frame = NetworkFrame {
            particles: &self.particles,
            pointer: self.pointer.position(),
            size,
            connection_distance: self.connection_distance,
            elapsed: now,
        };
        draw(&frame, &self.config, &mut self.commands);
        self.commands.replay(&mut self.surface);
        self.frames_drawn += 1;

        tracing::trace!(
            "Frame {}: {} particles, {} commands, dt {:.4}s",
            self.frames_drawn,
            self.particles.len(),
            self.commands.len(),
            dt
        );

        if self.config.animate {
            self.schedule();
        }
    }

    /// Cancels the pending frame and releases every listener. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted && self.listeners.is_empty() && self.pending_frame.is_none() {
            return;
        }
        self.cancel_pending();
        self.listeners.clear();
        self.mounted = false;
        tracing::debug!("Particle network unmounted after {} frames", self.frames_drawn);
    }

    /// Current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Last viewport received.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resolved particle link distance.
    #[must_use]
    pub fn connection_distance(&self) -> f32 {
        self.connection_distance
    }

    /// Last pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position()
    }

    /// Handle of the scheduled frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Returns true between `mount` and `unmount`.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns true unless the surface is scrolled out of view.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Frames stepped and drawn so far.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn schedule(&mut self) {
        if self.mounted && self.visible && !self.viewport.is_empty() && self.pending_frame.is_none() {
            self.pending_frame = Some(self.host.request_frame());
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
    }
}

impl<H: Host, S: DrawSurface> Drop for ParticleNetwork<H, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
