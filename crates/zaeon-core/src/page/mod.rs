//! Page-level state machine.
//!
//! One owner for the menu, the role picker and the onboarding modal. Hosts
//! feed `PageAction`s in and get `Outcome`s back; the current mode picks
//! which transition table handles the action.

mod view;

pub use view::{OnboardingView, PageView, StepView};

use serde::Serialize;

use crate::api::types::{Effect, Outcome};
use crate::input::keys::Key;
use crate::menu::{Menu, MenuAction, RolePicker, MENU};
use crate::onboarding::{Ensino, OnboardingSequencer, Step};

/// Which layer of the page has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    Menu,
    RolePicker,
    Onboarding,
}

/// Discrete input from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Key(Key),
    /// Pointer entered menu item `index`.
    HoverMenu(usize),
    /// Menu item `index` was clicked.
    ClickMenu(usize),
    PickerPrev,
    PickerNext,
    /// The highlighted role chip was clicked.
    PickerConfirm,
    /// An onboarding text input changed.
    EditField(Step, String),
    SetEnsino(Ensino),
    /// Close button, backdrop or "Cancelar".
    CloseOnboarding,
    /// "Continuar" button.
    SubmitOnboarding,
}

#[derive(Debug, Default)]
pub struct PageMachine {
    menu: Menu,
    picker: RolePicker,
    picker_open: bool,
    onboarding: OnboardingSequencer,
}

impl PageMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PageMode {
        if self.onboarding.is_open() {
            PageMode::Onboarding
        } else if self.picker_open {
            PageMode::RolePicker
        } else {
            PageMode::Menu
        }
    }

    pub fn dispatch(&mut self, action: PageAction) -> Outcome {
        let before = self.mode();
        let outcome = match before {
            PageMode::Menu => self.on_menu(action),
            PageMode::RolePicker => self.on_picker(action),
            PageMode::Onboarding => self.on_onboarding(action),
        };
        let after = self.mode();
        if before != after {
            log::info!("page: {:?} -> {:?}", before, after);
        }
        outcome
    }

    /// Convenience for hosts that forward raw `KeyboardEvent.code`s.
    pub fn key_code(&mut self, code: &str) -> Outcome {
        match Key::from_code(code) {
            Some(key) => self.dispatch(PageAction::Key(key)),
            None => Outcome::ignored(),
        }
    }

    pub fn snapshot(&self) -> PageView {
        let role = self.picker.role();
        PageView {
            mode: self.mode(),
            menu_index: self.menu.index(),
            picker_open: self.picker_open,
            picker_index: self.picker.index(),
            picker_role: role,
            picker_label: role.label(),
            onboarding: self.onboarding.session().map(OnboardingView::from_session),
        }
    }

    fn on_menu(&mut self, action: PageAction) -> Outcome {
        match action {
            PageAction::Key(Key::Up) => {
                self.menu.up();
                Outcome::consumed()
            }
            PageAction::Key(Key::Down) => {
                self.menu.down();
                Outcome::consumed()
            }
            PageAction::Key(Key::Enter) => self.choose_menu_item(),
            action => self.on_pointer(action),
        }
    }

    fn on_picker(&mut self, action: PageAction) -> Outcome {
        match action {
            PageAction::Key(Key::Left) | PageAction::PickerPrev => {
                self.picker.prev();
                Outcome::consumed()
            }
            PageAction::Key(Key::Right) | PageAction::PickerNext => {
                self.picker.next();
                Outcome::consumed()
            }
            PageAction::Key(Key::Enter) | PageAction::PickerConfirm => {
                self.onboarding.open(self.picker.role())
            }
            PageAction::Key(Key::Escape) => {
                self.picker_open = false;
                Outcome::consumed()
            }
            PageAction::Key(_) => Outcome::ignored(),
            action => self.on_pointer(action),
        }
    }

    fn on_onboarding(&mut self, action: PageAction) -> Outcome {
        match action {
            PageAction::Key(key) => self.onboarding.handle_key(key),
            PageAction::EditField(step, value) => {
                self.onboarding.set_field(step, value);
                Outcome::consumed()
            }
            PageAction::SetEnsino(ensino) => {
                self.onboarding.set_ensino(ensino);
                Outcome::consumed()
            }
            PageAction::CloseOnboarding => self.onboarding.close(),
            PageAction::SubmitOnboarding => self.onboarding.submit(),
            // The page behind the modal is inert.
            _ => Outcome::ignored(),
        }
    }

    /// Menu pointer handling, live whether or not the picker is open.
    fn on_pointer(&mut self, action: PageAction) -> Outcome {
        match action {
            PageAction::HoverMenu(index) => {
                self.menu.hover(index);
                Outcome::consumed()
            }
            PageAction::ClickMenu(index) if index < MENU.len() => {
                self.menu.hover(index);
                self.choose_menu_item()
            }
            _ => Outcome::ignored(),
        }
    }

    fn choose_menu_item(&mut self) -> Outcome {
        match self.menu.selected().action {
            MenuAction::OpenRolePicker => {
                self.picker_open = true;
                Outcome::consumed()
            }
            MenuAction::Link(href) => Outcome::with_effects(vec![Effect::Navigate(href.to_string())]),
        }
    }
}
