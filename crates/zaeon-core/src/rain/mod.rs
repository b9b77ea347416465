//! Glyph-rain background: columns of fading glyphs falling across the
//! viewport.
//!
//! The renderer is host-agnostic. The host measures the surface, supplies a
//! `DrawTarget` and calls `frame` once per animation frame; pacing,
//! resize observation and teardown belong to the host.

mod column;
mod glyphs;
mod surface;

pub use column::GlyphColumn;
pub use glyphs::{GlyphSource, PALETTE};
pub use surface::Surface;

use crate::api::config::RainConfig;
use crate::core::rng::RandomSource;
use crate::renderer::target::DrawTarget;

/// Number of columns for a surface `width` logical pixels wide.
pub fn column_count(config: &RainConfig, width: f32) -> usize {
    let fitted = (width / config.column_width()).floor() as i64 - config.column_trim as i64;
    fitted.max(config.min_columns as i64) as usize
}

/// The animation state for one mounted surface.
pub struct GlyphRain<R: RandomSource> {
    config: RainConfig,
    surface: Surface,
    columns: Vec<GlyphColumn>,
    source: &'static GlyphSource,
    rng: R,
    font: String,
}

impl<R: RandomSource> GlyphRain<R> {
    pub fn new(config: RainConfig, surface: Surface, rng: R) -> Self {
        let font = config.font();
        let mut rain = Self {
            config,
            surface,
            columns: Vec::new(),
            source: GlyphSource::shared(),
            rng,
            font,
        };
        rain.rebuild_columns();
        rain
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn columns(&self) -> &[GlyphColumn] {
        &self.columns
    }

    /// Size the target's backing store and set up the logical transform
    /// and font. Call once after mounting and again after every resize.
    pub fn attach(&self, target: &mut impl DrawTarget) {
        let (w, h) = self.surface.backing_size();
        target.resize(w, h);
        target.set_scale(self.surface.ratio);
        target.set_font(&self.font);
    }

    /// Adopt a new surface size. Every column is rebuilt from scratch.
    pub fn resize(&mut self, surface: Surface, target: &mut impl DrawTarget) {
        self.surface = surface;
        self.rebuild_columns();
        self.attach(target);
    }

    fn rebuild_columns(&mut self) {
        let count = column_count(&self.config, self.surface.width);
        let len = self.source.len();
        self.columns = (0..count)
            .map(|i| GlyphColumn::spawn(i, len, &mut self.rng))
            .collect();
        log::debug!(
            "glyph rain: {} columns for {}x{} @{}x",
            count,
            self.surface.width,
            self.surface.height,
            self.surface.ratio
        );
    }

    /// Paint one frame and advance every column.
    pub fn frame(&mut self, target: &mut impl DrawTarget) {
        let font_size = self.config.font_size;
        let column_width = self.config.column_width();
        let trail = self.config.trail_length as usize;
        let height = self.surface.height;
        let len = self.source.len();
        let recycle_below = height + trail as f32 * font_size;
        let alpha_span = self.config.head_alpha - self.config.tail_alpha;
        let mut buf = [0u8; 4];

        target.set_global_alpha(1.0);
        target.set_fill_style(&self.config.fade_fill);
        target.fill_rect(0.0, 0.0, self.surface.width, height);

        for (i, col) in self.columns.iter_mut().enumerate() {
            let x = i as f32 * column_width;
            let head_y = col.head * font_size;
            target.set_fill_style(col.color_style());

            for j in 0..trail {
                let y = head_y - j as f32 * font_size;
                if y < -font_size {
                    break;
                }
                if y > height + font_size {
                    continue;
                }
                let t = if trail > 1 {
                    j as f32 / (trail - 1) as f32
                } else {
                    0.0
                };
                target.set_global_alpha(self.config.head_alpha - alpha_span * t);
                let glyph = self.source.glyph(col.glyph_index(j, len));
                target.fill_text(glyph.encode_utf8(&mut buf), x, y);
            }

            col.head += col.speed;
            if head_y > recycle_below {
                col.recycle(len, &mut self.rng);
            }
        }

        target.set_global_alpha(1.0);
    }
}
