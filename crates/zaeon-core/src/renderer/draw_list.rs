use super::target::DrawTarget;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    SetScale(f32),
    SetFont(String),
    SetFillStyle(String),
    SetGlobalAlpha(f32),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    FillText { text: String, x: f32, y: f32 },
}

/// A `DrawTarget` that records commands instead of painting.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All glyphs drawn, in order, with their positions.
    pub fn glyphs(&self) -> impl Iterator<Item = (&str, f32, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, x, y } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    /// Number of `fill_text` calls recorded.
    pub fn glyph_count(&self) -> usize {
        self.glyphs().count()
    }
}

impl DrawTarget for DrawList {
    fn backend(&self) -> &'static str {
        "draw-list"
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn set_scale(&mut self, scale: f32) {
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::SetFont(font.to_string()));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::SetFillStyle(style.to_string()));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
