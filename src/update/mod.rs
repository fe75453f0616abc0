//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each message is
//! applied to completion before the next one is accepted.

mod app;
mod document;
mod editor;

use crate::commands::Cmd;
use crate::messages::{EditCommand, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::EditSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Edit(command) => match command {
            EditCommand::MoveUp
            | EditCommand::MoveDown
            | EditCommand::MoveLeft
            | EditCommand::MoveRight => update_editor(model, command),
            _ => update_document(model, command),
        },
        Msg::App(m) => update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = EditSnapshot::from_editor(&model.editor);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = EditSnapshot::from_editor(&model.editor);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }

    if result.is_some_and(|cmd| cmd.needs_redraw()) {
        let line: String = model
            .current_line_render_sequence()
            .iter()
            .map(|c| char::from(c.ch))
            .collect();
        debug!(target: "render", row = model.editor.cursor.row, %line, "current line");
    }

    model.editor.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Edit::MoveUp`
/// - `Edit::InsertChar('x')`
/// - `App::Resize(800, 600)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
