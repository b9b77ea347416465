// extensions/keyframes.rs
//
// Looping keyframe tracks: evenly spaced values, eased between neighbours.

use super::easing::{ease, Easing};

/// A value that cycles through keyframes forever.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    keys: Vec<f32>,
    /// Seconds for one pass through every key.
    duration: f32,
    easing: Easing,
}

impl KeyframeTrack {
    pub fn new(keys: &[f32], duration: f32, easing: Easing) -> Self {
        Self {
            keys: keys.to_vec(),
            duration: duration.max(f32::EPSILON),
            easing,
        }
    }

    /// Value at `time` seconds since the track started.
    pub fn sample(&self, time: f32) -> f32 {
        match self.keys.len() {
            0 => 0.0,
            1 => self.keys[0],
            n => {
                let segments = (n - 1) as f32;
                let phase = (time / self.duration).rem_euclid(1.0) * segments;
                let i = (phase.floor() as usize).min(n - 2);
                ease(self.keys[i], self.keys[i + 1], phase - i as f32, self.easing)
            }
        }
    }

    /// Resting value, used when motion is reduced.
    pub fn rest(&self) -> f32 {
        self.keys.first().copied().unwrap_or(0.0)
    }
}

/// Values of the hero tracks at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    /// Vertical offset of the headline in pixels.
    pub text_y: f32,
    pub text_opacity: f32,
    /// Continuous index into the headline gradient list.
    pub gradient_phase: f32,
    /// Vertical offset of the artwork in pixels.
    pub art_y: f32,
}

/// The about-section motion: a floating, breathing headline over a
/// floating artwork.
#[derive(Debug, Clone)]
pub struct HeroMotion {
    text_y: KeyframeTrack,
    text_opacity: KeyframeTrack,
    gradient: KeyframeTrack,
    art_y: KeyframeTrack,
    reduced: bool,
    time: f32,
}

/// Headline gradient stops (`0xRRGGBB`), cycled by
/// `HeroFrame::gradient_phase`. The last entry repeats the first so the loop
/// closes without a jump.
pub const HERO_GRADIENTS: [[u32; 3]; 4] = [
    [0x3b82f6, 0x38bdf8, 0x22d3ee],
    [0x6366f1, 0x8b5cf6, 0xec4899],
    [0x7c3aed, 0x8b5cf6, 0x10b981],
    [0x3b82f6, 0x38bdf8, 0x22d3ee],
];

/// Blend one 8-bit channel through its square, as framer-motion mixes colors.
fn mix_channel(from: u32, to: u32, t: f32) -> u32 {
    let (a, b) = ((from & 0xff) as f32, (to & 0xff) as f32);
    let v = (a * a + (b * b - a * a) * t).max(0.0).sqrt();
    (v.round() as u32).min(0xff)
}

fn mix_color(from: u32, to: u32, t: f32) -> u32 {
    [16u32, 8, 0]
        .into_iter()
        .fold(0, |rgb, shift| rgb | mix_channel(from >> shift, to >> shift, t) << shift)
}

/// CSS `linear-gradient` for a continuous `phase` into `HERO_GRADIENTS`.
pub fn hero_gradient(phase: f32) -> String {
    let last = (HERO_GRADIENTS.len() - 1) as f32;
    let phase = if phase.is_finite() { phase.clamp(0.0, last) } else { 0.0 };
    let i = (phase.floor() as usize).min(HERO_GRADIENTS.len() - 2);
    let t = phase - i as f32;
    let (from, to) = (HERO_GRADIENTS[i], HERO_GRADIENTS[i + 1]);
    let stops: Vec<String> = (0..3)
        .map(|k| format!("#{:06x}", mix_color(from[k], to[k], t)))
        .collect();
    format!("linear-gradient(90deg,{})", stops.join(","))
}

impl HeroMotion {
    pub fn new(reduced: bool) -> Self {
        Self {
            text_y: KeyframeTrack::new(&[0.0, -8.0, 0.0], 12.0, Easing::EaseInOut),
            text_opacity: KeyframeTrack::new(&[1.0, 0.85, 1.0], 12.0, Easing::EaseInOut),
            gradient: KeyframeTrack::new(&[0.0, 1.0, 2.0, 3.0], 12.0, Easing::EaseInOut),
            art_y: KeyframeTrack::new(&[0.0, -18.0, 0.0], 6.0, Easing::EaseInOut),
            reduced,
            time: 0.0,
        }
    }

    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Advance by `dt` seconds and return the new frame.
    pub fn tick(&mut self, dt: f32) -> HeroFrame {
        if !self.reduced {
            self.time += dt.max(0.0);
        }
        self.frame()
    }

    pub fn frame(&self) -> HeroFrame {
        if self.reduced {
            return HeroFrame {
                text_y: self.text_y.rest(),
                text_opacity: self.text_opacity.rest(),
                gradient_phase: self.gradient.rest(),
                art_y: self.art_y.rest(),
            };
        }
        HeroFrame {
            text_y: self.text_y.sample(self.time),
            text_opacity: self.text_opacity.sample(self.time),
            gradient_phase: self.gradient.sample(self.time),
            art_y: self.art_y.sample(self.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_hits_keys_on_schedule() {
        let track = KeyframeTrack::new(&[0.0, -8.0, 0.0], 12.0, Easing::EaseInOut);
        assert_eq!(track.sample(0.0), 0.0);
        assert!((track.sample(6.0) - -8.0).abs() < 1e-4);
        assert!(track.sample(12.0).abs() < 1e-4);
        // loops
        assert!((track.sample(18.0) - -8.0).abs() < 1e-4);
    }

    #[test]
    fn track_stays_within_keys() {
        let track = KeyframeTrack::new(&[1.0, 0.85, 1.0], 12.0, Easing::EaseInOut);
        for i in 0..240 {
            let v = track.sample(i as f32 * 0.1);
            assert!((0.85 - 1e-5..=1.0 + 1e-5).contains(&v), "{}", v);
        }
    }

    #[test]
    fn degenerate_tracks() {
        assert_eq!(KeyframeTrack::new(&[], 1.0, Easing::Linear).sample(3.0), 0.0);
        assert_eq!(KeyframeTrack::new(&[4.0], 1.0, Easing::Linear).sample(3.0), 4.0);
    }

    #[test]
    fn art_floats_twice_as_fast() {
        let mut hero = HeroMotion::new(false);
        let frame = hero.tick(3.0);
        assert!((frame.art_y - -18.0).abs() < 1e-4);
        assert!((frame.text_y - -4.0).abs() < 1e-3);
    }

    #[test]
    fn reduced_motion_freezes_everything() {
        let mut hero = HeroMotion::new(true);
        let frame = hero.tick(3.0);
        assert_eq!(
            frame,
            HeroFrame {
                text_y: 0.0,
                text_opacity: 1.0,
                gradient_phase: 0.0,
                art_y: 0.0
            }
        );
        assert!(hero.is_reduced());
    }

    #[test]
    fn gradient_phase_tracks_keys() {
        let mut hero = HeroMotion::new(false);
        let phase = hero.tick(4.0).gradient_phase;
        assert!((phase - 1.0).abs() < 1e-4);
        assert_eq!(
            hero_gradient(phase),
            "linear-gradient(90deg,#6366f1,#8b5cf6,#ec4899)"
        );
    }

    #[test]
    fn gradient_keys_render_exactly() {
        assert_eq!(hero_gradient(0.0), "linear-gradient(90deg,#3b82f6,#38bdf8,#22d3ee)");
        assert_eq!(hero_gradient(2.0), "linear-gradient(90deg,#7c3aed,#8b5cf6,#10b981)");
        assert_eq!(hero_gradient(3.0), hero_gradient(0.0));
    }

    #[test]
    fn gradient_blends_between_keys() {
        // Red channel 0x3b -> 0x63 through the squares: sqrt((59² + 99²) / 2) ≈ 81.
        let mid = hero_gradient(0.5);
        assert!(mid.starts_with("linear-gradient(90deg,#51"), "{}", mid);
        assert_ne!(mid, hero_gradient(0.0));
        assert_ne!(mid, hero_gradient(1.0));
    }

    #[test]
    fn gradient_phase_out_of_range_is_clamped() {
        assert_eq!(hero_gradient(-2.0), hero_gradient(0.0));
        assert_eq!(hero_gradient(9.0), hero_gradient(3.0));
        assert_eq!(hero_gradient(f32::NAN), hero_gradient(0.0));
    }
}
