use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use zaeon_core::{DrawTarget, Surface};

use crate::error::MountError;

/// `DrawTarget` backed by a canvas 2D context.
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Fails when the browser cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(MountError::js)?
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Current displayed size and pixel density.
    pub fn measure(&self, window: &Window) -> Surface {
        Surface::measure(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
            window.device_pixel_ratio() as f32,
        )
    }
}

impl DrawTarget for Canvas2d {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_scale(&mut self, scale: f32) {
        let s = scale as f64;
        if let Err(err) = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0) {
            log::warn!("canvas transform rejected: {:?}", err);
        }
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_baseline("top");
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        // Only fails for non-finite coordinates; a dropped glyph is harmless.
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
