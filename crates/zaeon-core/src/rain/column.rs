use crate::core::rng::RandomSource;

use super::glyphs::PALETTE;

/// Rows above the top edge a fresh column may start at.
pub const SPAWN_DEPTH: f32 = 40.0;
/// Rows above the top edge a recycled column restarts at.
pub const RESPAWN_DEPTH: f32 = 30.0;
/// Slowest column speed in rows per frame.
pub const BASE_SPEED: f32 = 0.50;
/// Speed spread across the bands.
pub const SPEED_SPREAD: f32 = 0.32;
/// Number of speed bands columns cycle through.
pub const SPEED_BANDS: usize = 7;
/// Chance a recycled column keeps its color.
pub const KEEP_COLOR_THRESHOLD: f32 = 0.7;

/// One vertical lane of falling glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphColumn {
    /// Head position in rows; negative while still above the surface.
    pub head: f32,
    /// Rows advanced per frame.
    pub speed: f32,
    /// Index into `PALETTE`.
    pub color: usize,
    /// Rotating offset into the glyph source.
    pub offset: usize,
}

impl GlyphColumn {
    /// Fresh column for lane `index`.
    pub fn spawn(index: usize, source_len: usize, rng: &mut impl RandomSource) -> Self {
        let head = -rng.next_f32() * SPAWN_DEPTH;
        let speed = BASE_SPEED + (index % SPEED_BANDS) as f32 * (SPEED_SPREAD / SPEED_BANDS as f32);
        let color = (index + (rng.next_f32() * 3.0) as usize) % PALETTE.len();
        let offset = (rng.next_f32() * source_len as f32) as usize % source_len.max(1);
        Self {
            head,
            speed,
            color,
            offset,
        }
    }

    /// Palette entry for this column.
    pub fn color_style(&self) -> &'static str {
        PALETTE[self.color % PALETTE.len()]
    }

    /// Source index of the glyph `depth` rows behind the head.
    /// Always in `[0, source_len)` regardless of how far above the surface
    /// the head is.
    pub fn glyph_index(&self, depth: usize, source_len: usize) -> usize {
        if source_len == 0 {
            return 0;
        }
        let len = source_len as f32;
        let raw = (self.offset as f32 + self.head - depth as f32).rem_euclid(len);
        raw.floor() as usize % source_len
    }

    /// Move back above the surface with a new stretch of the source and,
    /// sometimes, a new color.
    pub fn recycle(&mut self, source_len: usize, rng: &mut impl RandomSource) {
        self.head = -rng.next_f32() * RESPAWN_DEPTH;
        let jump = (5.0 + rng.next_f32() * 25.0) as usize;
        self.offset = (self.offset + jump) % source_len.max(1);
        if rng.next_f32() > KEEP_COLOR_THRESHOLD {
            self.color = (rng.next_f32() * PALETTE.len() as f32) as usize % PALETTE.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    struct Fixed(f32);

    impl RandomSource for Fixed {
        fn next_f32(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn speed_bands_repeat_every_seven() {
        let mut rng = Rng::new(1);
        let a = GlyphColumn::spawn(2, 62, &mut rng);
        let b = GlyphColumn::spawn(9, 62, &mut rng);
        assert_eq!(a.speed, b.speed);
        let first = GlyphColumn::spawn(0, 62, &mut rng);
        assert_eq!(first.speed, BASE_SPEED);
        let last = GlyphColumn::spawn(6, 62, &mut rng);
        assert!((last.speed - (0.5 + 6.0 * 0.32 / 7.0)).abs() < 1e-6);
    }

    #[test]
    fn spawn_starts_above_surface() {
        let mut rng = Rng::new(3);
        for i in 0..50 {
            let col = GlyphColumn::spawn(i, 62, &mut rng);
            assert!(col.head <= 0.0 && col.head > -SPAWN_DEPTH);
            assert!(col.offset < 62);
            assert!(col.color < PALETTE.len());
        }
    }

    #[test]
    fn spawn_color_follows_lane() {
        let col = GlyphColumn::spawn(4, 62, &mut Fixed(0.0));
        assert_eq!(col.color, 4);
        let col = GlyphColumn::spawn(8, 62, &mut Fixed(0.99));
        assert_eq!(col.color, (8 + 2) % 9);
    }

    #[test]
    fn glyph_index_never_negative() {
        let col = GlyphColumn {
            head: -39.5,
            speed: 0.5,
            color: 0,
            offset: 0,
        };
        for depth in 0..24 {
            assert!(col.glyph_index(depth, 62) < 62);
        }
        // -39.5 - 0 wraps to 22.5 → 22
        assert_eq!(col.glyph_index(0, 62), 22);
    }

    #[test]
    fn glyph_index_walks_backwards_with_depth() {
        let col = GlyphColumn {
            head: 10.0,
            speed: 0.5,
            color: 0,
            offset: 3,
        };
        assert_eq!(col.glyph_index(0, 62), 13);
        assert_eq!(col.glyph_index(1, 62), 12);
        assert_eq!(col.glyph_index(13, 62), 0);
        assert_eq!(col.glyph_index(14, 62), 61);
    }

    #[test]
    fn recycle_keeps_color_below_threshold() {
        let mut col = GlyphColumn {
            head: 90.0,
            speed: 0.5,
            color: 5,
            offset: 60,
        };
        col.recycle(62, &mut Fixed(0.5));
        assert_eq!(col.head, -15.0);
        // jump = floor(5 + 12.5) = 17
        assert_eq!(col.offset, (60 + 17) % 62);
        assert_eq!(col.color, 5);
    }

    #[test]
    fn recycle_recolors_above_threshold() {
        let mut col = GlyphColumn {
            head: 90.0,
            speed: 0.5,
            color: 0,
            offset: 0,
        };
        col.recycle(62, &mut Fixed(0.8));
        assert_eq!(col.color, 7);
    }
}
