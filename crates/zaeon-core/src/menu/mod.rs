//! Hero menu and the role carousel behind "Nova conta".

mod cursor;

pub use cursor::WrapCursor;

use crate::onboarding::Role;

/// What choosing a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Handled in place: opens the role picker.
    OpenRolePicker,
    /// Ordinary link.
    Link(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

pub const MENU: [MenuItem; 4] = [
    MenuItem {
        label: "Nova conta",
        action: MenuAction::OpenRolePicker,
    },
    MenuItem {
        label: "Carregar conta",
        action: MenuAction::Link("/signin"),
    },
    MenuItem {
        label: "Opções",
        action: MenuAction::Link("/settings"),
    },
    MenuItem {
        label: "Manual",
        action: MenuAction::Link("/manual"),
    },
];

/// Highlighted menu entry.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    cursor: WrapCursor,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            cursor: WrapCursor::new(MENU.len()),
        }
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn selected(&self) -> MenuItem {
        MENU[self.cursor.index()]
    }

    pub fn up(&mut self) {
        self.cursor.prev();
    }

    pub fn down(&mut self) {
        self.cursor.next();
    }

    pub fn hover(&mut self, index: usize) {
        self.cursor.set(index);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// Carousel over the four roles.
#[derive(Debug, Clone, Copy)]
pub struct RolePicker {
    cursor: WrapCursor,
}

impl RolePicker {
    pub fn new() -> Self {
        Self {
            cursor: WrapCursor::new(Role::ALL.len()),
        }
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn role(&self) -> Role {
        Role::ALL[self.cursor.index()]
    }

    pub fn prev(&mut self) {
        self.cursor.prev();
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }
}

impl Default for RolePicker {
    fn default() -> Self {
        Self::new()
    }
}
