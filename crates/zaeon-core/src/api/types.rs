use serde::Serialize;

use crate::onboarding::Step;

/// A side effect the page logic asks the host to perform.
/// The core never touches the DOM; the web bridge applies these in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Full navigation to a relative URL (path plus optional query).
    Navigate(String),
    /// Disable background page scroll, remembering the previous setting.
    LockScroll,
    /// Restore the scroll setting saved by the matching `LockScroll`.
    ReleaseScroll,
    /// Move input focus to the control for this onboarding step.
    Focus(Step),
}

/// Result of dispatching one action into a state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the input was handled. Hosts call `preventDefault` on
    /// consumed keyboard events and let the rest through.
    pub consumed: bool,
    pub effects: Vec<Effect>,
}

impl Outcome {
    /// Input not handled, nothing to do.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Input handled with no side effects.
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            effects: Vec::new(),
        }
    }

    /// Input handled with the given side effects.
    pub fn with_effects(effects: Vec<Effect>) -> Self {
        Self {
            consumed: true,
            effects,
        }
    }

    /// Append another effect, marking the input as handled.
    pub fn push(&mut self, effect: Effect) {
        self.consumed = true;
        self.effects.push(effect);
    }

    /// The navigation target, if this outcome leaves the page.
    pub fn navigation(&self) -> Option<&str> {
        self.effects.iter().find_map(|e| match e {
            Effect::Navigate(url) => Some(url.as_str()),
            _ => None,
        })
    }
}
