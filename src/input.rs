//! Keyboard input mapping
//!
//! Translates winit logical keys into `EditCommand`s. Only key presses are
//! passed here; the runtime drops releases.

use winit::keyboard::{Key, NamedKey};

use crate::messages::EditCommand;

/// Convert a pressed key to an edit command
///
/// Returns None for keys with no editing meaning (modifiers, function keys,
/// composed text longer than one character).
pub fn command_from_key(key: &Key) -> Option<EditCommand> {
    match key {
        Key::Named(named) => match named {
            NamedKey::ArrowUp => Some(EditCommand::MoveUp),
            NamedKey::ArrowDown => Some(EditCommand::MoveDown),
            NamedKey::ArrowLeft => Some(EditCommand::MoveLeft),
            NamedKey::ArrowRight => Some(EditCommand::MoveRight),
            NamedKey::Backspace => Some(EditCommand::DeleteBefore),
            NamedKey::Enter => Some(EditCommand::NewLine),
            NamedKey::Tab => Some(EditCommand::Tab),
            NamedKey::CapsLock => Some(EditCommand::ToggleCapsLock),
            NamedKey::Space => Some(EditCommand::InsertChar(' ')),
            _ => None,
        },

        // The platform already applied shift/caps-lock to the character
        Key::Character(s) => {
            let mut chars = s.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(EditCommand::InsertChar(ch))
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows() {
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::ArrowUp)),
            Some(EditCommand::MoveUp)
        );
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::ArrowLeft)),
            Some(EditCommand::MoveLeft)
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::Backspace)),
            Some(EditCommand::DeleteBefore)
        );
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::Enter)),
            Some(EditCommand::NewLine)
        );
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::Tab)),
            Some(EditCommand::Tab)
        );
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::CapsLock)),
            Some(EditCommand::ToggleCapsLock)
        );
    }

    #[test]
    fn test_character_key() {
        assert_eq!(
            command_from_key(&Key::Character("s".into())),
            Some(EditCommand::InsertChar('s'))
        );
        assert_eq!(
            command_from_key(&Key::Named(NamedKey::Space)),
            Some(EditCommand::InsertChar(' '))
        );
    }

    #[test]
    fn test_non_ascii_character_is_passed_through() {
        // The edit engine decides what is representable
        assert_eq!(
            command_from_key(&Key::Character("é".into())),
            Some(EditCommand::InsertChar('é'))
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(command_from_key(&Key::Named(NamedKey::F1)), None);
        assert_eq!(command_from_key(&Key::Named(NamedKey::Shift)), None);
        assert_eq!(command_from_key(&Key::Character("ab".into())), None);
    }
}
