/// Keys the page reacts to, parsed from `KeyboardEvent.code`.
/// Physical codes are used so WASD works on any keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Delete,
}

impl Key {
    /// Map a `KeyboardEvent.code` string. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "ArrowUp" | "KeyW" => Key::Up,
            "ArrowDown" | "KeyS" => Key::Down,
            "ArrowLeft" | "KeyA" => Key::Left,
            "ArrowRight" | "KeyD" => Key::Right,
            "Enter" | "NumpadEnter" => Key::Enter,
            "Escape" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            _ => return None,
        };
        Some(key)
    }

    /// Backspace or Delete.
    pub fn is_erase(self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_agree() {
        assert_eq!(Key::from_code("ArrowUp"), Key::from_code("KeyW"));
        assert_eq!(Key::from_code("ArrowDown"), Key::from_code("KeyS"));
        assert_eq!(Key::from_code("ArrowLeft"), Key::from_code("KeyA"));
        assert_eq!(Key::from_code("ArrowRight"), Key::from_code("KeyD"));
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(Key::from_code("KeyQ"), None);
        assert_eq!(Key::from_code(""), None);
    }

    #[test]
    fn erase_keys() {
        assert!(Key::Backspace.is_erase());
        assert!(Key::Delete.is_erase());
        assert!(!Key::Escape.is_erase());
    }
}
