//! "Saiba mais" button that trails the cursor over the about-us artwork.

use glam::Vec2;

use crate::api::types::{Effect, Outcome};
use crate::extensions::spring::Spring;

/// Where the button leads.
pub const ABOUT_PATH: &str = "/about";
/// Pixels between the cursor and the button's anchor.
pub const LIFT: f32 = 28.0;
const HIDDEN_SCALE: f32 = 0.92;
/// Artwork scale while the cursor is over it.
pub const ART_HOVER_SCALE: f32 = 1.05;

const STIFFNESS: f32 = 360.0;
const DAMPING: f32 = 30.0;
const MASS: f32 = 0.6;

/// What the host should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CtaFrame {
    /// Anchor in section coordinates; the button is centred horizontally on
    /// it and sits above it.
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Scale of the hovered artwork itself.
    pub art_scale: f32,
}

#[derive(Debug, Clone)]
pub struct HoverCta {
    anchor: Vec2,
    hovering: bool,
    opacity: Spring,
    scale: Spring,
    art_scale: Spring,
}

impl HoverCta {
    pub fn new() -> Self {
        Self {
            anchor: Vec2::ZERO,
            hovering: false,
            opacity: Spring::new(0.0, STIFFNESS, DAMPING, MASS),
            scale: Spring::new(HIDDEN_SCALE, STIFFNESS, DAMPING, MASS),
            art_scale: Spring::new(1.0, STIFFNESS, DAMPING, MASS),
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Cursor moved to (x, y) relative to the section's top-left corner.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.anchor = Vec2::new(x, y - LIFT);
    }

    pub fn hover_start(&mut self) {
        self.hovering = true;
        self.opacity.set_target(1.0);
        self.scale.set_target(1.0);
        self.art_scale.set_target(ART_HOVER_SCALE);
    }

    pub fn hover_end(&mut self) {
        self.hovering = false;
        self.opacity.set_target(0.0);
        self.scale.set_target(HIDDEN_SCALE);
        self.art_scale.set_target(1.0);
    }

    /// Advance every spring by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> CtaFrame {
        self.opacity.tick(dt);
        self.scale.tick(dt);
        self.art_scale.tick(dt);
        self.frame()
    }

    pub fn frame(&self) -> CtaFrame {
        CtaFrame {
            x: self.anchor.x,
            y: self.anchor.y,
            opacity: self.opacity.value.clamp(0.0, 1.0),
            scale: self.scale.value,
            art_scale: self.art_scale.value,
        }
    }

    pub fn click(&self) -> Outcome {
        Outcome::with_effects(vec![Effect::Navigate(ABOUT_PATH.to_string())])
    }
}

impl Default for HoverCta {
    fn default() -> Self {
        Self::new()
    }
}
