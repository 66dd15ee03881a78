//! Integration test for the particle network lifecycle against a fake host.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use neonfolio_effects::{FrameHandle, Host, ListenerKind, NetworkConfig, ParticleNetwork};
use neonfolio_shared::Vec2;
use neonfolio_ui::{Color, DrawSurface, GradientStop, Rect, Viewport};

#[derive(Debug, Default)]
struct HostLog {
    active_listeners: Vec<ListenerKind>,
    next_handle: u64,
    scheduled: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

struct FakeHost {
    viewport: Viewport,
    log: Rc<RefCell<HostLog>>,
}

struct FakeListener {
    kind: ListenerKind,
    log: Rc<RefCell<HostLog>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        let mut log = self.log.borrow_mut();
        if let Some(pos) = log.active_listeners.iter().position(|k| *k == self.kind) {
            log.active_listeners.remove(pos);
        }
    }
}

impl Host for FakeHost {
    type Listener = FakeListener;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn listen(&mut self, kind: ListenerKind) -> FakeListener {
        self.log.borrow_mut().active_listeners.push(kind);
        FakeListener {
            kind,
            log: Rc::clone(&self.log),
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        let mut log = self.log.borrow_mut();
        log.next_handle += 1;
        let handle = FrameHandle(log.next_handle);
        log.scheduled.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut log = self.log.borrow_mut();
        log.scheduled.retain(|h| *h != handle);
        log.cancelled.push(handle);
    }
}

#[derive(Debug, Default)]
struct SurfaceLog {
    resizes: Vec<(f32, f32, f32)>,
    clears: usize,
    circles: usize,
}

struct FakeSurface {
    available: bool,
    log: Rc<RefCell<SurfaceLog>>,
}

impl DrawSurface for FakeSurface {
    fn is_available(&self) -> bool {
        self.available
    }
    fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.log.borrow_mut().resizes.push((width, height, dpr));
    }
    fn clear(&mut self) {
        self.log.borrow_mut().clears += 1;
    }
    fn fill_rect(&mut self, _: Rect, _: Color, _: f32) {}
    fn fill_gradient_rect(&mut self, _: Rect, _: f32, _: &[GradientStop; 2]) {}
    fn fill_circle(&mut self, _: Vec2, _: f32, _: Color) {
        self.log.borrow_mut().circles += 1;
    }
    fn glow(&mut self, _: Vec2, _: f32, _: Color) {}
    fn line(&mut self, _: Vec2, _: Vec2, _: Color, _: f32) {}
    fn image(&mut self, _: Rect, _: &str, _: f32, _: f32) {}
    fn text(&mut self, _: &str, _: Vec2, _: Color, _: f32) {}
}

struct Harness {
    host: Rc<RefCell<HostLog>>,
    surface: Rc<RefCell<SurfaceLog>>,
    network: ParticleNetwork<FakeHost, FakeSurface>,
}

fn harness(viewport: Viewport, config: NetworkConfig, available: bool) -> Harness {
    let host_log = Rc::new(RefCell::new(HostLog::default()));
    let surface_log = Rc::new(RefCell::new(SurfaceLog::default()));
    let host = FakeHost {
        viewport,
        log: Rc::clone(&host_log),
    };
    let surface = FakeSurface {
        available,
        log: Rc::clone(&surface_log),
    };
    let network = ParticleNetwork::with_seed(host, surface, config, 1234).unwrap();
    Harness {
        host: host_log,
        surface: surface_log,
        network,
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Fires the scheduled frame the way a host's event loop would.
fn fire(h: &mut Harness, now: Duration) {
    if let Some(handle) = h.network.pending_frame() {
        h.host.borrow_mut().scheduled.retain(|s| *s != handle);
    }
    h.network.frame(now);
}

#[test]
fn test_mount_registers_and_schedules() {
    let mut h = harness(Viewport::new(1920.0, 1080.0), NetworkConfig::default(), true);
    h.network.mount();

    assert_eq!(h.host.borrow().active_listeners.len(), 3);
    assert_eq!(h.host.borrow().scheduled.len(), 1);
    assert_eq!(h.network.particles().len(), 60);
    assert_eq!(h.surface.borrow().resizes, vec![(1920.0, 1080.0, 1.0)]);

    fire(&mut h, ms(16));
    assert_eq!(h.network.frames_drawn(), 1);
    assert_eq!(h.surface.borrow().clears, 1);
    assert!(h.surface.borrow().circles >= 60);
    // Rescheduled
    assert_eq!(h.host.borrow().scheduled.len(), 1);
    assert!(h.network.pending_frame().is_some());
}

#[test]
fn test_unmount_releases_everything() {
    let mut h = harness(Viewport::new(1280.0, 800.0), NetworkConfig::default(), true);
    h.network.mount();
    let pending = h.network.pending_frame().unwrap();

    h.network.unmount();
    assert!(h.host.borrow().active_listeners.is_empty());
    assert_eq!(h.host.borrow().cancelled, vec![pending]);
    assert!(!h.network.is_mounted());

    // Idempotent, and a late frame callback does nothing
    h.network.unmount();
    h.network.frame(ms(100));
    assert_eq!(h.host.borrow().cancelled.len(), 1);
    assert_eq!(h.network.frames_drawn(), 0);
}

#[test]
fn test_drop_unmounts() {
    let h = harness(Viewport::new(1280.0, 800.0), NetworkConfig::default(), true);
    let host = Rc::clone(&h.host);
    let Harness { mut network, .. } = h;
    network.mount();
    drop(network);

    assert!(host.borrow().active_listeners.is_empty());
    assert_eq!(host.borrow().cancelled.len(), 1);
}

#[test]
fn test_resize_cancels_in_flight_frame_and_reseeds() {
    let config = NetworkConfig::neon_panel();
    let mut h = harness(Viewport::new(1920.0, 1080.0), config, true);
    h.network.mount();
    let first = h.network.pending_frame().unwrap();
    // floor(1080 * 0.6 * 0.1) = 64
    assert_eq!(h.network.particles().len(), 64);

    h.network
        .resized(Viewport::new(375.0, 667.0).with_device_pixel_ratio(3.0));

    assert!(h.host.borrow().cancelled.contains(&first));
    assert_eq!(h.host.borrow().scheduled.len(), 1);
    // floor(375 * 0.6 * 0.1) = 22
    assert_eq!(h.network.particles().len(), 22);
    assert!(h
        .network
        .particles()
        .iter()
        .all(|p| p.position.x < 375.0 && p.position.y < 667.0));
    assert!((h.network.connection_distance() - 375.0 * 0.35).abs() < 1e-3);
    // DPR clamped to 2
    assert_eq!(h.surface.borrow().resizes.last(), Some(&(375.0, 667.0, 2.0)));
}

#[test]
fn test_zero_area_skips_reseed() {
    let mut h = harness(Viewport::new(0.0, 0.0), NetworkConfig::default(), true);
    h.network.mount();

    assert!(h.network.particles().is_empty());
    assert!(h.network.pending_frame().is_none());
    assert!(h.surface.borrow().resizes.is_empty());

    h.network.frame(ms(16));
    assert_eq!(h.surface.borrow().clears, 0);

    h.network.resized(Viewport::new(800.0, 600.0));
    assert_eq!(h.network.particles().len(), 60);
    assert!(h.network.pending_frame().is_some());
}

#[test]
fn test_panel_laid_out_after_mount_starts_on_resize() {
    let mut h = harness(Viewport::new(0.0, 0.0), NetworkConfig::neon_panel(), true);
    h.network.mount();
    assert!(h.network.particles().is_empty());

    // Scrolling into view without a size does not start the loop
    h.network.visibility_changed(false);
    h.network.visibility_changed(true);
    assert!(h.network.pending_frame().is_none());
    assert!(h.host.borrow().scheduled.is_empty());

    h.network.resized(Viewport::new(200.0, 48.0));
    assert_eq!(h.network.particles().len(), 4);
    assert_eq!(h.surface.borrow().resizes, vec![(200.0, 48.0, 1.0)]);
    assert!(h.network.pending_frame().is_some());

    fire(&mut h, ms(16));
    assert_eq!(h.network.frames_drawn(), 1);
    assert!(h.network.pending_frame().is_some());
}

#[test]
fn test_visibility_pauses_and_resumes() {
    let mut h = harness(Viewport::new(1280.0, 800.0), NetworkConfig::default(), true);
    h.network.mount();
    fire(&mut h, ms(16));

    h.network.visibility_changed(false);
    assert!(h.network.pending_frame().is_none());
    assert!(h.host.borrow().scheduled.is_empty());

    // A callback that was already in flight does not restart the loop
    h.network.frame(ms(32));
    assert_eq!(h.network.frames_drawn(), 1);
    assert!(h.host.borrow().scheduled.is_empty());

    h.network.visibility_changed(true);
    assert_eq!(h.host.borrow().scheduled.len(), 1);

    fire(&mut h, ms(10_000));
    assert_eq!(h.network.frames_drawn(), 2);
}

#[test]
fn test_missing_context_is_a_noop() {
    let mut h = harness(Viewport::new(1280.0, 800.0), NetworkConfig::default(), false);
    h.network.mount();
    h.network.frame(ms(16));

    assert_eq!(h.network.frames_drawn(), 0);
    assert_eq!(h.surface.borrow().clears, 0);
    assert!(h.network.pending_frame().is_none());
}

#[test]
fn test_static_panel_draws_once() {
    let config = NetworkConfig {
        animate: false,
        ..NetworkConfig::neon_panel()
    };
    let mut h = harness(Viewport::new(200.0, 48.0), config, true);
    h.network.mount();

    // Pointer is not tracked by the panel
    assert_eq!(h.host.borrow().active_listeners.len(), 2);

    h.network.frame(ms(16));
    assert_eq!(h.network.frames_drawn(), 1);
    assert!(h.network.pending_frame().is_none());
}

#[test]
fn test_pointer_pulls_particles_in() {
    let mut h = harness(Viewport::new(800.0, 600.0), NetworkConfig::default(), true);
    h.network.mount();
    let pointer = Vec2::new(400.0, 300.0);
    h.network.pointer_moved(pointer);

    let near_before: Vec<f32> = h
        .network
        .particles()
        .iter()
        .map(|p| p.position.distance(pointer))
        .collect();

    for frame in 1..=30 {
        h.network.frame(ms(frame * 16));
    }

    let grown = h
        .network
        .particles()
        .iter()
        .zip(&near_before)
        .filter(|(_, d)| **d < 100.0)
        .all(|(p, _)| p.radius > p.base_radius);
    assert!(grown);
}

#[test]
fn test_invalid_config_is_rejected() {
    let host = FakeHost {
        viewport: Viewport::new(100.0, 100.0),
        log: Rc::default(),
    };
    let surface = FakeSurface {
        available: true,
        log: Rc::default(),
    };
    let config = NetworkConfig {
        palette: Vec::new(),
        ..NetworkConfig::default()
    };
    assert!(ParticleNetwork::new(host, surface, config).is_err());
}
