//! `CanvasRenderingContext2d` as a [`DrawSurface`].

use std::collections::HashMap;
use std::f64::consts::TAU;

use neonfolio_shared::Vec2;
use neonfolio_ui::{Color, DrawSurface, GradientStop, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// A canvas element and its 2D context.
///
/// Draws in CSS pixels; the backing store is scaled by the device pixel
/// ratio passed to [`DrawSurface::resize`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
    dpr: f64,
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasSurface {
    /// Wraps a canvas. A canvas without a 2D context yields an unavailable surface.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if context.is_none() {
            tracing::debug!("Canvas has no 2d context; drawing disabled");
        }
        Self {
            canvas,
            context,
            dpr: 1.0,
            images: HashMap::new(),
        }
    }

    /// The wrapped canvas.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn rounded_rect_path(ctx: &CanvasRenderingContext2d, bounds: Rect, radius: f32) {
        let (x, y) = (f64::from(bounds.x), f64::from(bounds.y));
        let (w, h) = (f64::from(bounds.width), f64::from(bounds.height));
        let r = f64::from(radius).min(w / 2.0).min(h / 2.0).max(0.0);

        ctx.begin_path();
        ctx.move_to(x + r, y);
        check(ctx.arc_to(x + w, y, x + w, y + h, r));
        check(ctx.arc_to(x + w, y + h, x, y + h, r));
        check(ctx.arc_to(x, y + h, x, y, r));
        check(ctx.arc_to(x, y, x + w, y, r));
        ctx.close_path();
    }

    fn image_element(&mut self, source: &str) -> Option<HtmlImageElement> {
        if let Some(image) = self.images.get(source) {
            return Some(image.clone());
        }
        let image = HtmlImageElement::new().ok()?;
        image.set_src(source);
        self.images.insert(source.to_owned(), image.clone());
        Some(image)
    }
}

/// Canvas calls only fail on invalid arguments; log and keep drawing.
fn check(result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::trace!("Canvas call failed: {:?}", err);
    }
}

impl DrawSurface for CanvasSurface {
    fn is_available(&self) -> bool {
        self.context.is_some()
    }

    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.dpr = f64::from(device_pixel_ratio);
        let style = self.canvas.style();
        check(style.set_property("width", &format!("{width}px")));
        check(style.set_property("height", &format!("{height}px")));
        self.canvas
            .set_width((f64::from(width) * self.dpr).floor() as u32);
        self.canvas
            .set_height((f64::from(height) * self.dpr).floor() as u32);
        if let Some(ctx) = &self.context {
            check(ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0));
        }
    }

    fn clear(&mut self) {
        let Some(ctx) = &self.context else { return };
        // Clear in device pixels, draw in CSS pixels
        check(ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0));
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        check(ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0));
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color, corner_radius: f32) {
        let Some(ctx) = &self.context else { return };
        ctx.set_fill_style_str(&color.to_css());
        if corner_radius > 0.0 {
            Self::rounded_rect_path(ctx, bounds, corner_radius);
            ctx.fill();
        } else {
            ctx.fill_rect(
                f64::from(bounds.x),
                f64::from(bounds.y),
                f64::from(bounds.width),
                f64::from(bounds.height),
            );
        }
    }

    fn fill_gradient_rect(&mut self, bounds: Rect, corner_radius: f32, stops: &[GradientStop; 2]) {
        let Some(ctx) = &self.context else { return };
        let gradient = ctx.create_linear_gradient(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.right()),
            f64::from(bounds.bottom()),
        );
        for stop in stops {
            check(gradient.add_color_stop(stop.offset, &stop.color.to_css()));
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        Self::rounded_rect_path(ctx, bounds, corner_radius);
        ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let Some(ctx) = &self.context else { return };
        ctx.begin_path();
        check(ctx.arc(f64::from(center.x), f64::from(center.y), f64::from(radius), 0.0, TAU));
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
    }

    fn glow(&mut self, center: Vec2, radius: f32, color: Color) {
        let Some(ctx) = &self.context else { return };
        let (x, y, r) = (f64::from(center.x), f64::from(center.y), f64::from(radius));
        let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        check(gradient.add_color_stop(0.0, &color.to_css()));
        check(gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css()));
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        check(ctx.arc(x, y, r, 0.0, TAU));
        ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let Some(ctx) = &self.context else { return };
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(f64::from(width));
        ctx.begin_path();
        ctx.move_to(f64::from(from.x), f64::from(from.y));
        ctx.line_to(f64::from(to.x), f64::from(to.y));
        ctx.stroke();
    }

    fn image(&mut self, bounds: Rect, source: &str, opacity: f32, rotation_deg: f32) {
        let Some(image) = self.image_element(source) else { return };
        let Some(ctx) = &self.context else { return };
        if !image.complete() {
            return;
        }

        let center = bounds.center();
        ctx.save();
        ctx.set_global_alpha(f64::from(opacity));
        check(ctx.translate(f64::from(center.x), f64::from(center.y)));
        check(ctx.rotate(f64::from(rotation_deg).to_radians()));
        check(ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            -f64::from(bounds.width) / 2.0,
            -f64::from(bounds.height) / 2.0,
            f64::from(bounds.width),
            f64::from(bounds.height),
        ));
        ctx.restore();
    }

    fn text(&mut self, text: &str, position: Vec2, color: Color, font_size: f32) {
        let Some(ctx) = &self.context else { return };
        ctx.set_font(&format!("600 {font_size}px sans-serif"));
        ctx.set_text_baseline("top");
        ctx.set_fill_style_str(&color.to_css());
        check(ctx.fill_text(text, f64::from(position.x), f64::from(position.y)));
    }
}
