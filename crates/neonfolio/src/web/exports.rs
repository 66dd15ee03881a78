//! JavaScript entry points.

// wasm-bindgen expands to unsafe ABI glue
#![allow(unsafe_code)]

use neonfolio_effects::NetworkConfig;
use neonfolio_shared::Vec2;
use wasm_bindgen::prelude::*;

use super::preview::from_millis;
use super::{
    canvas_by_id, mount_background, MountedBackground, PreviewOverlay, SessionStorageFlags,
    WebError,
};
use crate::intro::{IntroGate, IntroPlan};
use crate::site::SiteConfig;

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Handle returned to JavaScript. Call `unmount()` when the canvas goes away.
#[wasm_bindgen]
pub struct BackgroundHandle {
    inner: Option<MountedBackground>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Stops the animation and releases listeners.
    pub fn unmount(&mut self) {
        if self.inner.take().is_some() {
            tracing::debug!("Background unmounted from JS");
        }
    }

    /// Returns true while the background is running.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.as_ref().is_some_and(MountedBackground::is_mounted)
    }
}

fn mount(canvas_id: &str, config: NetworkConfig) -> Result<BackgroundHandle, JsValue> {
    console_error_panic_hook::set_once();
    let mounted = mount_background(canvas_id, config)?;
    Ok(BackgroundHandle {
        inner: Some(mounted),
    })
}

/// Mounts the interactive particle network on a canvas.
///
/// `config_toml` uses the `[background]` table layout; missing keys keep
/// their defaults.
///
/// # Errors
///
/// Throws if the canvas is missing or the config is rejected.
#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background_js(
    canvas_id: &str,
    config_toml: Option<String>,
) -> Result<BackgroundHandle, JsValue> {
    let config = match config_toml {
        Some(text) => toml::from_str::<NetworkConfig>(&text)
            .map_err(|err| js_sys::Error::new(&err.to_string()))?,
        None => NetworkConfig::default(),
    };
    mount(canvas_id, config)
}

/// Mounts the static neon panel background on a canvas.
///
/// # Errors
///
/// Throws if the canvas is missing.
#[wasm_bindgen(js_name = mountNeonPanel)]
pub fn mount_neon_panel_js(canvas_id: &str) -> Result<BackgroundHandle, JsValue> {
    mount(canvas_id, NetworkConfig::neon_panel())
}

/// Returns true if the intro should play on `route` in this session.
#[wasm_bindgen(js_name = shouldPlayIntro)]
#[must_use]
pub fn should_play_intro(route: &str) -> bool {
    IntroGate::default().resolve(route, &SessionStorageFlags::from_window()) == IntroPlan::Play
}

/// Records that the intro was shown in this session.
#[wasm_bindgen(js_name = finishIntro)]
pub fn finish_intro() {
    IntroGate::default().finish(&mut SessionStorageFlags::from_window());
}

/// Hover preview overlay returned to JavaScript.
///
/// Timestamps are `performance.now()` milliseconds. Call `render` from
/// `requestAnimationFrame` while it returns true.
#[wasm_bindgen]
pub struct PreviewHandle {
    overlay: PreviewOverlay,
}

#[wasm_bindgen]
impl PreviewHandle {
    /// Pointer entered row `index` at viewport position (`x`, `y`).
    pub fn enter(&mut self, index: usize, x: f32, y: f32, now_ms: f64) {
        self.overlay
            .menu_mut()
            .enter(index, Vec2::new(x, y), from_millis(now_ms));
    }

    /// Pointer left the hovered row.
    pub fn leave(&mut self, now_ms: f64) {
        self.overlay.menu_mut().leave(from_millis(now_ms));
    }

    /// Pointer moved over the list.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.overlay.menu_mut().pointer_moved(Vec2::new(x, y));
    }

    /// Fires due timers. Returns true if the state changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.overlay.menu_mut().tick(from_millis(now_ms))
    }

    /// Redraws the overlay. Returns true while a timer or fade is pending.
    pub fn render(&mut self, now_ms: f64) -> bool {
        self.overlay.render(from_millis(now_ms))
    }

    /// Link target of row `index`, if it has one.
    pub fn link(&self, index: usize) -> Option<String> {
        self.overlay.menu().activate(index).map(|nav| nav.href)
    }
}

/// Binds the hover preview for the site's projects to a canvas overlay.
///
/// `site_toml` is the full site config; only `[[projects]]` and `[preview]`
/// are used here.
///
/// # Errors
///
/// Throws if the canvas is missing or the site config is rejected.
#[wasm_bindgen(js_name = mountPreview)]
pub fn mount_preview_js(canvas_id: &str, site_toml: &str) -> Result<PreviewHandle, JsValue> {
    console_error_panic_hook::set_once();
    let site = SiteConfig::from_toml_str(site_toml).map_err(WebError::from)?;
    let (window, canvas) = canvas_by_id(canvas_id)?;
    Ok(PreviewHandle {
        overlay: PreviewOverlay::new(window, canvas, site.preview_menu()),
    })
}
