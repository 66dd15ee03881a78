//! Browser window as a [`Host`]: `requestAnimationFrame`, DOM listeners,
//! a `ResizeObserver` and an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use js_sys::Array;
use neonfolio_effects::{FrameHandle, Host, ListenerKind};
use neonfolio_shared::Vec2;
use neonfolio_ui::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, EventTarget, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry,
    MouseEvent, ResizeObserver, Window,
};

use super::WebNetwork;

/// Weak link from browser callbacks back to the mounted network.
pub(crate) type NetworkRef = Weak<RefCell<Option<WebNetwork>>>;

/// Runs `f` on the network if it is still mounted and not already borrowed.
fn with_network(network: &NetworkRef, f: impl FnOnce(&mut WebNetwork)) {
    let Some(slot) = network.upgrade() else { return };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        tracing::trace!("Particle network busy; event dropped");
        return;
    };
    if let Some(network) = guard.as_mut() {
        f(network);
    }
}

/// Canvas size in CSS pixels plus the window's pixel ratio.
pub(crate) fn viewport_of(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width().floor() as f32, rect.height().floor() as f32)
        .with_device_pixel_ratio(window.device_pixel_ratio() as f32)
}

/// Re-measures the canvas and reseeds only if the size or pixel ratio moved.
fn remeasure(window: &Window, canvas: &HtmlCanvasElement, network: &NetworkRef) {
    let viewport = viewport_of(window, canvas);
    with_network(network, |n| {
        if n.viewport() != viewport {
            n.resized(viewport);
        }
    });
}

/// A DOM subscription. Dropping it unsubscribes.
pub enum WebListener {
    /// `addEventListener` registration.
    Event {
        /// Target the listener was added to.
        target: EventTarget,
        /// Event name.
        name: &'static str,
        /// JS callback (kept alive while registered).
        callback: Closure<dyn FnMut(Event)>,
    },
    /// `IntersectionObserver` watching the canvas.
    Observer {
        /// The observer.
        observer: IntersectionObserver,
        /// JS callback (kept alive while observing).
        callback: Closure<dyn FnMut(Array)>,
    },
    /// `ResizeObserver` watching the canvas box.
    SizeObserver {
        /// The observer.
        observer: ResizeObserver,
        /// JS callback (kept alive while observing).
        callback: Closure<dyn FnMut(Array)>,
    },
    /// Several subscriptions released together.
    Group(Vec<WebListener>),
    /// Registration failed; nothing to release.
    Inert,
}

impl WebListener {
    fn event(target: EventTarget, name: &'static str, callback: Closure<dyn FnMut(Event)>) -> Self {
        if let Err(err) =
            target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to listen for {}: {:?}", name, err);
            return Self::Inert;
        }
        Self::Event {
            target,
            name,
            callback,
        }
    }

    fn visibility(canvas: &HtmlCanvasElement, network: NetworkRef) -> Self {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let visible = entries
                .get(0)
                .dyn_into::<IntersectionObserverEntry>()
                .map_or(true, |entry| entry.is_intersecting());
            with_network(&network, |n| n.visibility_changed(visible));
        }) as Box<dyn FnMut(Array)>);

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(canvas);
                Self::Observer { observer, callback }
            }
            Err(err) => {
                tracing::warn!("IntersectionObserver unavailable: {:?}", err);
                Self::Inert
            }
        }
    }

    /// Element resizes that leave the window alone (layout, late CSS).
    fn canvas_size(window: Window, canvas: HtmlCanvasElement, network: NetworkRef) -> Self {
        let target = canvas.clone();
        let callback = Closure::wrap(Box::new(move |_: Array| {
            remeasure(&window, &canvas, &network);
        }) as Box<dyn FnMut(Array)>);

        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&target);
                Self::SizeObserver { observer, callback }
            }
            Err(err) => {
                tracing::warn!("ResizeObserver unavailable: {:?}", err);
                Self::Inert
            }
        }
    }
}

impl Drop for WebListener {
    fn drop(&mut self) {
        match self {
            Self::Event {
                target,
                name,
                callback,
            } => {
                if let Err(err) = target
                    .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
                {
                    tracing::warn!("Failed to remove {} listener: {:?}", name, err);
                }
            }
            Self::Observer { observer, .. } => observer.disconnect(),
            Self::SizeObserver { observer, .. } => observer.disconnect(),
            Self::Group(_) | Self::Inert => {}
        }
    }
}

/// The browser window driving one canvas.
pub struct BrowserHost {
    window: Window,
    canvas: HtmlCanvasElement,
    network: NetworkRef,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl BrowserHost {
    pub(crate) fn new(window: Window, canvas: HtmlCanvasElement, network: NetworkRef) -> Self {
        let frame_network = network.clone();
        let on_frame = Closure::wrap(Box::new(move |timestamp: f64| {
            if !timestamp.is_finite() || timestamp < 0.0 {
                return;
            }
            let now = Duration::from_secs_f64(timestamp / 1000.0);
            with_network(&frame_network, |n| n.frame(now));
        }) as Box<dyn FnMut(f64)>);

        Self {
            window,
            canvas,
            network,
            on_frame,
        }
    }
}

impl Host for BrowserHost {
    type Listener = WebListener;

    fn viewport(&self) -> Viewport {
        viewport_of(&self.window, &self.canvas)
    }

    fn listen(&mut self, kind: ListenerKind) -> WebListener {
        let network = self.network.clone();
        match kind {
            ListenerKind::PointerMove => {
                let canvas = self.canvas.clone();
                let callback = Closure::wrap(Box::new(move |event: Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
                    let rect = canvas.get_bounding_client_rect();
                    let position = Vec2::new(
                        (f64::from(event.client_x()) - rect.left()) as f32,
                        (f64::from(event.client_y()) - rect.top()) as f32,
                    );
                    with_network(&network, |n| n.pointer_moved(position));
                }) as Box<dyn FnMut(Event)>);
                WebListener::event(self.window.clone().into(), "pointermove", callback)
            }
            ListenerKind::Resize => {
                let window = self.window.clone();
                let canvas = self.canvas.clone();
                let observed = network.clone();
                // Window resize still fires on pixel ratio changes (zoom, monitor move)
                let callback = Closure::wrap(Box::new(move |_: Event| {
                    remeasure(&window, &canvas, &network);
                }) as Box<dyn FnMut(Event)>);
                WebListener::Group(vec![
                    WebListener::event(self.window.clone().into(), "resize", callback),
                    WebListener::canvas_size(self.window.clone(), self.canvas.clone(), observed),
                ])
            }
            ListenerKind::Visibility => WebListener::visibility(&self.canvas, network),
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(u64::from(id.unsigned_abs())),
            Err(err) => {
                tracing::warn!("requestAnimationFrame failed: {:?}", err);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let Ok(id) = i32::try_from(handle.0) else { return };
        if id == 0 {
            return;
        }
        if let Err(err) = self.window.cancel_animation_frame(id) {
            tracing::trace!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}
