//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effect requested by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Repaint the window
    Redraw,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}
