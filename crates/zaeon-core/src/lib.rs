pub mod api;
pub mod core;
pub mod cta;
pub mod extensions;
pub mod input;
pub mod menu;
pub mod onboarding;
pub mod page;
pub mod rain;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{PageConfig, RainConfig};
pub use api::types::{Effect, Outcome};
pub use crate::core::rng::{RandomSource, Rng};
pub use cta::{CtaFrame, HoverCta};
pub use extensions::{
    hero_gradient, Easing, HeroFrame, HeroMotion, KeyframeTrack, Spring, HERO_GRADIENTS,
};
pub use input::keys::Key;
pub use menu::{Menu, MenuAction, MenuItem, RolePicker, WrapCursor, MENU};
pub use onboarding::{Draft, Ensino, OnboardingSequencer, Role, Session, Step};
pub use page::{PageAction, PageMachine, PageMode, PageView};
pub use rain::{GlyphColumn, GlyphRain, GlyphSource, Surface, PALETTE};
pub use renderer::draw_list::{DrawCommand, DrawList};
pub use renderer::target::DrawTarget;
