use serde::{Deserialize, Serialize};

/// Tunables for the glyph-rain background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Glyph font size in CSS pixels. One row of the rain is one font size tall.
    pub font_size: f32,
    /// Column width as a multiple of the font size (rounded to whole pixels).
    pub column_width_factor: f32,
    /// Columns trimmed from the count that would fill the width.
    pub column_trim: u32,
    /// Lower bound on the number of columns.
    pub min_columns: u32,
    /// Glyphs drawn per column, head included.
    pub trail_length: u32,
    /// Opacity of the head glyph.
    pub head_alpha: f32,
    /// Opacity at the far end of the trail.
    pub tail_alpha: f32,
    /// CSS fill painted over the surface every frame to fade old glyphs.
    pub fade_fill: String,
    /// Font family stack for the glyphs.
    pub font_family: String,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            column_width_factor: 1.05,
            column_trim: 6,
            min_columns: 8,
            trail_length: 24,
            head_alpha: 0.95,
            tail_alpha: 0.0,
            fade_fill: "rgba(0,0,0,0.22)".to_string(),
            font_family: r#""Noto Sans SC","PingFang SC","Microsoft YaHei",monospace,sans-serif"#
                .to_string(),
        }
    }
}

impl RainConfig {
    /// Width of one column in logical pixels.
    pub fn column_width(&self) -> f32 {
        (self.font_size * self.column_width_factor).round().max(1.0)
    }

    /// CSS font shorthand for the canvas.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// Page-wide configuration, optionally supplied by the host as JSON at mount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub rain: RainConfig,
    /// Fixed seed for the rain; `None` seeds from host entropy.
    pub seed: Option<u64>,
    /// Overrides the host's `prefers-reduced-motion` query when set.
    pub reduced_motion: Option<bool>,
}

impl PageConfig {
    /// Parse from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
