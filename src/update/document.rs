//! Text editing message handlers

use crate::commands::Cmd;
use crate::messages::EditCommand;
use crate::model::AppModel;

/// Handle buffer-mutating commands (insert, delete, split, tab, caps lock)
pub fn update_document(model: &mut AppModel, command: EditCommand) -> Option<Cmd> {
    let editor = &mut model.editor;
    match command {
        EditCommand::InsertChar(ch) => {
            if !editor.insert_char(ch) {
                return None;
            }
        }
        EditCommand::DeleteBefore => editor.delete_before(),
        EditCommand::NewLine => editor.new_line(),
        EditCommand::Tab => editor.insert_tab(),
        // Only the flag changes, nothing on screen does
        EditCommand::ToggleCapsLock => {
            editor.toggle_caps_lock();
            tracing::debug!(caps_lock = editor.caps_lock, "caps lock toggled");
            return None;
        }
        EditCommand::MoveUp
        | EditCommand::MoveDown
        | EditCommand::MoveLeft
        | EditCommand::MoveRight => return None,
    }
    Some(Cmd::Redraw)
}
