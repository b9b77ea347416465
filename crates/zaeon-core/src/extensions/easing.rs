// extensions/easing.rs
//
// Timing curves for the hero keyframe tracks.

/// Timing curve applied between two keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary CSS `cubic-bezier(x1, y1, x2, y2)`; `x1`/`x2` must lie in [0, 1].
    Bezier(f32, f32, f32, f32),
}

impl Easing {
    /// Progress at normalized time `t`, clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::Bezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One coordinate of a cubic bezier through (0,0) and (1,1).
fn curve(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn curve_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve x(s) = t for the curve parameter, then return y(s).
fn bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let mut s = t;
    for _ in 0..8 {
        let slope = curve_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - (curve(x1, x2, s) - t) / slope).clamp(0.0, 1.0);
    }
    // Newton can stall on flat stretches; finish with bisection.
    if (curve(x1, x2, s) - t).abs() > 1e-4 {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        for _ in 0..24 {
            s = (lo + hi) * 0.5;
            if curve(x1, x2, s) < t {
                lo = s;
            } else {
                hi = s;
            }
        }
    }
    curve(y1, y2, s)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `lerp` with the progress reshaped by `easing`.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn curves_pin_their_endpoints() {
        for e in [Easing::Linear, Easing::EaseInOut, Easing::Bezier(0.25, 0.1, 0.25, 1.0)] {
            assert!(close(e.apply(0.0), 0.0), "{:?}", e);
            assert!(close(e.apply(1.0), 1.0), "{:?}", e);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        assert!(close(Easing::EaseInOut.apply(0.5), 0.5));
        let early = Easing::EaseInOut.apply(0.2);
        let late = Easing::EaseInOut.apply(0.8);
        assert!(early < 0.2);
        assert!(close(early + late, 1.0));
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let e = Easing::Bezier(0.0, 0.0, 1.0, 1.0);
        for t in [0.1, 0.33, 0.7] {
            assert!(close(e.apply(t), t), "{}", t);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn ease_interpolates() {
        assert_eq!(ease(10.0, 20.0, 0.5, Easing::Linear), 15.0);
        assert!(close(ease(0.0, -8.0, 0.5, Easing::EaseInOut), -4.0));
    }
}
