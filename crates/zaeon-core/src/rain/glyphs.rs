//! The fixed glyph sequence and color palette shared by every rain column.

use std::sync::OnceLock;

const WORDS: [&str; 21] = [
    "教育", "学习", "知识", "智慧", "未来", "进步", "创新", "创造", "希望", "梦想",
    "成长", "勇气", "诚信", "合作", "和平", "自由", "幸运", "感恩", "友善", "光明", "科技",
];

/// Cool blues and teals.
pub const PALETTE: [&str; 9] = [
    "#9ecbff", "#5fb4ff", "#2b8eff", "#1a73e8", "#1572a1", "#00a7a7", "#009688", "#33cccc",
    "#7dd3fc",
];

/// Immutable sequence of glyphs the columns read from.
#[derive(Debug, Clone)]
pub struct GlyphSource {
    glyphs: Vec<char>,
}

impl GlyphSource {
    /// Interleave the words with token glyphs on fixed strides.
    pub fn build() -> Self {
        let mut text = String::new();
        for (i, word) in WORDS.iter().enumerate() {
            text.push_str(word);
            if i % 3 == 1 {
                text.push('₿');
            }
            if i % 5 == 2 {
                text.push('Ξ');
            }
            if i % 7 == 3 {
                text.push_str("ICP");
            }
        }
        Self {
            glyphs: text.chars().collect(),
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static GlyphSource {
        static SOURCE: OnceLock<GlyphSource> = OnceLock::new();
        SOURCE.get_or_init(GlyphSource::build)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, wrapping past the end.
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index % self.glyphs.len()]
    }
}
