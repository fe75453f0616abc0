//! Cursor movement message handlers

use crate::commands::Cmd;
use crate::messages::EditCommand;
use crate::model::AppModel;

/// Handle cursor movement commands
///
/// Movement never fails; at a buffer edge the cursor simply stays put.
pub fn update_editor(model: &mut AppModel, command: EditCommand) -> Option<Cmd> {
    let editor = &mut model.editor;
    match command {
        EditCommand::MoveUp => editor.move_up(),
        EditCommand::MoveDown => editor.move_down(),
        EditCommand::MoveLeft => editor.move_left(),
        EditCommand::MoveRight => editor.move_right(),
        _ => return None,
    }
    Some(Cmd::Redraw)
}
