//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Device-specific key
//! codes are mapped to `EditCommand`s by `crate::input` before they get here.

/// Abstract edit command, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Insert a character at the cursor (ignored if not single-byte)
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteBefore,
    /// Split the line at the cursor (Enter)
    NewLine,
    /// Insert `tab_width` spaces
    Tab,
    /// Flip the caps-lock flag
    ToggleCapsLock,
}

/// Application-level messages (window events)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Window resized to (width, height) in physical pixels
    Resize(u32, u32),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Edit(EditCommand),
    App(AppMsg),
}

impl From<EditCommand> for Msg {
    fn from(command: EditCommand) -> Self {
        Msg::Edit(command)
    }
}
