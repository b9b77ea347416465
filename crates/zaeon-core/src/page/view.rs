use serde::Serialize;

use crate::onboarding::{Draft, Role, Session, Step};

use super::PageMode;

/// Immutable picture of the page for the host to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub mode: PageMode,
    pub menu_index: usize,
    pub picker_open: bool,
    pub picker_index: usize,
    pub picker_role: Role,
    pub picker_label: &'static str,
    pub onboarding: Option<OnboardingView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingView {
    pub role: Role,
    pub role_label: &'static str,
    pub step_index: usize,
    pub steps: Vec<StepView>,
    pub draft: Draft,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub step: Step,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub active: bool,
    pub valid: bool,
}

impl OnboardingView {
    pub(super) fn from_session(session: &Session) -> Self {
        let role = session.role();
        let draft = session.draft();
        let steps = session
            .steps()
            .iter()
            .enumerate()
            .map(|(i, &step)| StepView {
                step,
                label: step.label(role),
                placeholder: step.placeholder(role),
                active: i == session.step_index(),
                valid: step.validate(draft),
            })
            .collect();
        Self {
            role,
            role_label: role.label(),
            step_index: session.step_index(),
            steps,
            draft: draft.clone(),
            can_submit: session.can_submit(),
        }
    }
}
