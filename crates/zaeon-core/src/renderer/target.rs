//! Drawing contract for 2D backends.
//!
//! Shaped after the canvas 2D context: the web bridge implements it on
//! `CanvasRenderingContext2d`, and `DrawList` records the same calls for
//! headless use and tests.

/// A 2D surface the page can paint on.
///
/// Coordinates are logical (CSS) pixels once `set_scale` has been applied.
pub trait DrawTarget {
    /// Backend identifier (e.g., "canvas2d", "draw-list").
    fn backend(&self) -> &'static str;

    /// Resize the backing store in device pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f32);

    /// Set the font used by `fill_text` (CSS font shorthand).
    fn set_font(&mut self, font: &str);

    /// Set the fill color (any CSS color string).
    fn set_fill_style(&mut self, style: &str);

    /// Set the global opacity for subsequent fills.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill a rectangle with the current style.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Draw a single glyph with its top-left corner at (x, y).
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}
