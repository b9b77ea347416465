// extensions/spring.rs
//
// Damped spring integrator for UI values that chase a moving target.

/// A one-dimensional damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Spring {
    /// Largest integration step; longer frames are subdivided.
    const MAX_STEP: f32 = 1.0 / 120.0;
    /// Longest span simulated by one `tick`. The springs used here settle
    /// well inside it, so longer gaps land at rest all the same.
    const MAX_FRAME: f32 = 1.0;
    /// Distance and speed under which the spring snaps to rest.
    const REST_EPSILON: f32 = 1e-3;

    pub fn new(value: f32, stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
            mass: mass.max(f32::EPSILON),
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < Self::REST_EPSILON
            && self.velocity.abs() < Self::REST_EPSILON
    }

    /// Advance by `dt` seconds (semi-implicit Euler). Negative or NaN `dt`
    /// is a no-op; anything past `MAX_FRAME` is simulated as `MAX_FRAME`.
    pub fn tick(&mut self, dt: f32) {
        // f32::max drops NaN; f32::min caps infinity.
        let dt = dt.max(0.0).min(Self::MAX_FRAME);
        let steps = (dt / Self::MAX_STEP).ceil() as u32;
        if steps > 0 {
            let h = dt / steps as f32;
            for _ in 0..steps {
                let force =
                    -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
                self.velocity += force / self.mass * h;
                self.value += self.velocity * h;
            }
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
