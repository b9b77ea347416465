/// Displayed size of the drawing surface plus the device pixel ratio used
/// for its backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Logical (CSS) width.
    pub width: f32,
    /// Logical (CSS) height.
    pub height: f32,
    /// Device pixel ratio clamped to [1, 2].
    pub ratio: f32,
}

impl Surface {
    pub const MIN_RATIO: f32 = 1.0;
    pub const MAX_RATIO: f32 = 2.0;

    /// Build from the measured CSS size and the raw `devicePixelRatio`.
    /// A missing or nonsensical ratio counts as 1.
    pub fn measure(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.clamp(Self::MIN_RATIO, Self::MAX_RATIO)
        } else {
            Self::MIN_RATIO
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            ratio,
        }
    }

    /// Backing buffer size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.ratio).floor() as u32,
            (self.height * self.ratio).floor() as u32,
        )
    }
}
