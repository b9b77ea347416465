use crate::api::types::{Effect, Outcome};
use crate::input::keys::Key;

use super::draft::{Draft, Ensino};
use super::role::Role;
use super::step::Step;
use super::submit::signup_url;

/// An open onboarding modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role: Role,
    step: usize,
    draft: Draft,
}

impl Session {
    fn new(role: Role) -> Self {
        Self {
            role,
            step: 0,
            draft: Draft::default(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn steps(&self) -> &'static [Step] {
        Step::sequence(self.role)
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> Step {
        self.steps()[self.step]
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    fn last_index(&self) -> usize {
        self.steps().len() - 1
    }

    /// Every step validates at once.
    pub fn can_submit(&self) -> bool {
        self.steps().iter().all(|s| s.validate(&self.draft))
    }

    fn current_is_blank(&self) -> bool {
        let step = self.current_step();
        !step.is_text() || self.draft.value(step).is_empty()
    }
}

/// The one-field-at-a-time onboarding modal.
///
/// `Closed` until `open`, then a chain of steps gated by validators. Leaving
/// happens through `close` (draft discarded) or `submit` (full navigation).
#[derive(Debug, Default)]
pub struct OnboardingSequencer {
    session: Option<Session>,
}

impl OnboardingSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Start a fresh session for `role`, discarding anything left over.
    pub fn open(&mut self, role: Role) -> Outcome {
        let was_open = self.session.is_some();
        self.session = Some(Session::new(role));
        log::info!("onboarding opened for {}", role.slug());

        let mut outcome = Outcome::consumed();
        if !was_open {
            outcome.push(Effect::LockScroll);
        }
        outcome.push(Effect::Focus(Step::Id));
        outcome
    }

    /// Discard the draft and leave the modal.
    pub fn close(&mut self) -> Outcome {
        match self.session.take() {
            Some(session) => {
                log::info!("onboarding closed at step {}", session.step);
                Outcome::with_effects(vec![Effect::ReleaseScroll])
            }
            None => Outcome::ignored(),
        }
    }

    /// Replace the text of a field. Ignored while closed or for steps the
    /// current role does not have.
    pub fn set_field(&mut self, step: Step, value: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            if session.steps().contains(&step) {
                session.draft.set(step, value.into());
            }
        }
    }

    pub fn set_ensino(&mut self, ensino: Ensino) {
        if let Some(session) = self.session.as_mut() {
            if session.role.asks_ensino() {
                session.draft.ensino = ensino;
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        self.session.as_ref().is_some_and(Session::can_submit)
    }

    /// Move forward if the current step validates; on the last step, submit.
    pub fn advance(&mut self) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::ignored();
        };
        let step = session.current_step();
        if !step.validate(&session.draft) {
            log::debug!("onboarding: {:?} does not validate yet", step);
            return Outcome::consumed();
        }
        if session.step < session.last_index() {
            session.step += 1;
            return Outcome::with_effects(vec![Effect::Focus(session.current_step())]);
        }
        self.submit()
    }

    /// Step back one field. No-op on the first step.
    pub fn retreat(&mut self) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::ignored();
        };
        if session.step == 0 {
            return Outcome::consumed();
        }
        session.step -= 1;
        Outcome::with_effects(vec![Effect::Focus(session.current_step())])
    }

    /// Redirect to signup with the collected answers, if all steps validate.
    pub fn submit(&mut self) -> Outcome {
        let Some(session) = self.session.as_ref() else {
            return Outcome::ignored();
        };
        if !session.can_submit() {
            return Outcome::consumed();
        }
        let url = signup_url(session.role, &session.draft);
        log::info!("onboarding submitted as {}", session.role.slug());
        self.session = None;
        Outcome::with_effects(vec![Effect::ReleaseScroll, Effect::Navigate(url)])
    }

    /// Keyboard handling while the modal is open.
    pub fn handle_key(&mut self, key: Key) -> Outcome {
        let Some(blank) = self.session.as_ref().map(Session::current_is_blank) else {
            return Outcome::ignored();
        };
        match key {
            Key::Escape => self.close(),
            Key::Enter => self.advance(),
            // A non-empty field keeps the key so the input can edit its text.
            k if k.is_erase() && blank => self.retreat(),
            _ => Outcome::ignored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(seq: &mut OnboardingSequencer) {
        seq.set_field(Step::Id, "0000-0001-2345-6789");
        seq.set_field(Step::Nome, "Ana Silva");
        seq.set_field(Step::Email, "ana@x.com");
        seq.set_field(Step::Celular, "11999999999");
    }

    fn step(seq: &OnboardingSequencer) -> usize {
        seq.session().map(Session::step_index).unwrap()
    }

    #[test]
    fn open_locks_scroll_and_focuses_id() {
        let mut seq = OnboardingSequencer::new();
        let out = seq.open(Role::Estudante);
        assert!(out.consumed);
        assert_eq!(out.effects, vec![Effect::LockScroll, Effect::Focus(Step::Id)]);
        assert_eq!(seq.session().unwrap().current_step(), Step::Id);
    }

    #[test]
    fn open_resets_leftovers() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        fill(&mut seq);
        seq.set_ensino(Ensino::Nao);
        seq.advance();
        seq.close();
        seq.open(Role::Estudante);
        let session = seq.session().unwrap();
        assert_eq!(session.draft(), &Draft::default());
        assert_eq!(session.draft().ensino, Ensino::Sim);
        assert_eq!(session.step_index(), 0);
    }

    #[test]
    fn reopen_while_open_does_not_double_lock() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        let out = seq.open(Role::Empresario);
        assert_eq!(out.effects, vec![Effect::Focus(Step::Id)]);
    }

    #[test]
    fn short_id_blocks_forever() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        seq.set_field(Step::Id, "12");
        for _ in 0..5 {
            let out = seq.handle_key(Key::Enter);
            assert!(out.consumed);
            assert!(out.effects.is_empty());
            assert_eq!(step(&seq), 0);
        }
        seq.set_field(Step::Id, "1234");
        let out = seq.handle_key(Key::Enter);
        assert_eq!(out.effects, vec![Effect::Focus(Step::Nome)]);
        assert_eq!(step(&seq), 1);
    }

    #[test]
    fn advance_requires_current_step_only() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Profissional);
        seq.set_field(Step::Id, "12345678901");
        seq.advance();
        // nome empty: blocked even though later fields are irrelevant
        seq.set_field(Step::Email, "ana@x.com");
        seq.advance();
        assert_eq!(step(&seq), 1);
    }

    #[test]
    fn pesquisador_scenario_submits_without_ensino() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Pesquisador);
        fill(&mut seq);
        for expected in 1..4 {
            seq.handle_key(Key::Enter);
            assert_eq!(step(&seq), expected);
        }
        assert!(seq.can_submit());
        let out = seq.handle_key(Key::Enter);
        let url = out.navigation().unwrap();
        assert!(url.starts_with("/signup?role=pesquisador&id=0000-0001-2345-6789"));
        assert!(!url.contains("ensino"));
        assert_eq!(out.effects[0], Effect::ReleaseScroll);
        assert!(!seq.is_open());
    }

    #[test]
    fn estudante_walks_five_steps() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        fill(&mut seq);
        for _ in 0..4 {
            seq.advance();
        }
        assert_eq!(seq.session().unwrap().current_step(), Step::Ensino);
        seq.set_ensino(Ensino::Nao);
        let out = seq.advance();
        assert!(out.navigation().unwrap().ends_with("&ensino=nao"));
    }

    #[test]
    fn erase_on_empty_field_retreats() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        seq.set_field(Step::Id, "1234");
        seq.advance();
        assert_eq!(step(&seq), 1);
        let out = seq.handle_key(Key::Backspace);
        assert!(out.consumed);
        assert_eq!(out.effects, vec![Effect::Focus(Step::Id)]);
        assert_eq!(step(&seq), 0);
    }

    #[test]
    fn erase_on_filled_field_is_left_to_the_input() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        seq.set_field(Step::Id, "1234");
        seq.advance();
        seq.set_field(Step::Nome, "Ana");
        let out = seq.handle_key(Key::Delete);
        assert!(!out.consumed);
        assert_eq!(step(&seq), 1);
    }

    #[test]
    fn erase_on_first_step_is_a_noop() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        let out = seq.handle_key(Key::Backspace);
        assert!(out.consumed);
        assert!(out.effects.is_empty());
        assert_eq!(step(&seq), 0);
    }

    #[test]
    fn erase_on_ensino_always_retreats() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Empresario);
        fill(&mut seq);
        for _ in 0..4 {
            seq.advance();
        }
        assert_eq!(step(&seq), 4);
        seq.handle_key(Key::Backspace);
        assert_eq!(step(&seq), 3);
    }

    #[test]
    fn escape_discards_and_releases() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        fill(&mut seq);
        let out = seq.handle_key(Key::Escape);
        assert_eq!(out.effects, vec![Effect::ReleaseScroll]);
        assert!(!seq.is_open());
        assert!(!seq.can_submit());
    }

    #[test]
    fn submit_button_needs_every_step() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        seq.set_field(Step::Id, "1234");
        let out = seq.submit();
        assert!(out.navigation().is_none());
        fill(&mut seq);
        // submit from step 0 is allowed once everything validates
        assert!(seq.submit().navigation().is_some());
    }

    #[test]
    fn pesquisador_ignores_ensino() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Pesquisador);
        seq.set_ensino(Ensino::Nao);
        seq.set_field(Step::Ensino, "nao");
        assert_eq!(seq.session().unwrap().draft().ensino, Ensino::Sim);
    }

    #[test]
    fn closed_sequencer_ignores_everything() {
        let mut seq = OnboardingSequencer::new();
        assert!(!seq.handle_key(Key::Enter).consumed);
        assert!(!seq.advance().consumed);
        assert!(!seq.retreat().consumed);
        assert!(!seq.close().consumed);
        seq.set_field(Step::Id, "ignored");
        assert!(seq.session().is_none());
    }

    #[test]
    fn arrows_pass_through_while_open() {
        let mut seq = OnboardingSequencer::new();
        seq.open(Role::Estudante);
        assert!(!seq.handle_key(Key::Up).consumed);
        assert!(!seq.handle_key(Key::Left).consumed);
    }
}
