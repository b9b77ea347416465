// extensions/mod.rs
//
// Small animation helpers used by the page sections.

pub mod easing;
pub mod keyframes;
pub mod spring;

pub use easing::{ease, lerp, Easing};
pub use keyframes::{hero_gradient, HeroFrame, HeroMotion, KeyframeTrack, HERO_GRADIENTS};
pub use spring::Spring;
