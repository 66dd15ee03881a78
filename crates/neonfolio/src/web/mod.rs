//! # Browser Binding
//!
//! Mounts a [`ParticleNetwork`] on an `HTMLCanvasElement`. The network lives
//! in a shared slot; every browser callback holds only a weak link to it, so
//! dropping the [`MountedBackground`] releases all listeners and the pending
//! animation frame.
//!
//! The hover preview ([`PreviewOverlay`]) registers no listeners of its own.
//! The page forwards row events and drives `render` from its frame loop.

mod exports;
mod host;
mod preview;
mod storage;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use neonfolio_effects::{ConfigError, NetworkConfig, ParticleNetwork};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

pub use exports::{
    finish_intro, mount_background_js, mount_neon_panel_js, mount_preview_js, should_play_intro,
    BackgroundHandle, PreviewHandle,
};
pub use host::{BrowserHost, WebListener};
pub use preview::PreviewOverlay;
pub use storage::SessionStorageFlags;
pub use surface::CanvasSurface;

use crate::error::SiteError;

/// Particle network bound to the browser.
pub type WebNetwork = ParticleNetwork<BrowserHost, CanvasSurface>;

type NetworkSlot = Rc<RefCell<Option<WebNetwork>>>;

/// Browser binding errors.
#[derive(Debug, Error)]
pub enum WebError {
    /// No global `window`.
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// No element with the given id.
    #[error("no element with id {0:?}")]
    CanvasNotFound(String),

    /// The element exists but is not a canvas.
    #[error("element {0:?} is not a canvas")]
    NotACanvas(String),

    /// Rejected background tuning.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rejected site config.
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// A mounted background. Dropping it unmounts.
pub struct MountedBackground {
    slot: NetworkSlot,
}

impl MountedBackground {
    /// Stops the animation and releases every listener. Idempotent.
    pub fn unmount(&mut self) {
        match self.slot.try_borrow_mut() {
            Ok(mut network) => {
                // Dropping the network unmounts it
                network.take();
            }
            Err(_) => tracing::warn!("Background busy; unmount skipped"),
        }
    }

    /// Returns true while the network is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.slot
            .try_borrow()
            .map(|network| network.as_ref().is_some_and(ParticleNetwork::is_mounted))
            .unwrap_or(true)
    }
}

impl Drop for MountedBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mounts a particle network on the canvas with id `canvas_id`.
///
/// # Errors
///
/// Returns an error if there is no such canvas or `config` is invalid.
pub fn mount_background(
    canvas_id: &str,
    config: NetworkConfig,
) -> Result<MountedBackground, WebError> {
    let (window, canvas) = canvas_by_id(canvas_id)?;
    mount_on_canvas(window, canvas, config)
}

/// Looks up the canvas with id `canvas_id` in the current window.
pub(crate) fn canvas_by_id(canvas_id: &str) -> Result<(Window, HtmlCanvasElement), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    let element = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| WebError::CanvasNotFound(canvas_id.to_owned()))?;
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WebError::NotACanvas(canvas_id.to_owned()))?;
    Ok((window, canvas))
}

/// Mounts a particle network on `canvas`.
///
/// # Errors
///
/// Returns an error if `config` is invalid.
pub fn mount_on_canvas(
    window: Window,
    canvas: HtmlCanvasElement,
    config: NetworkConfig,
) -> Result<MountedBackground, WebError> {
    let slot: NetworkSlot = Rc::new(RefCell::new(None));
    let host = BrowserHost::new(window, canvas.clone(), Rc::downgrade(&slot));
    let mut network = ParticleNetwork::new(host, CanvasSurface::new(canvas), config)?;
    network.mount();
    tracing::debug!(
        "Mounted background with {} particles",
        network.particles().len()
    );

    *slot.borrow_mut() = Some(network);
    Ok(MountedBackground { slot })
}
