//! Logging setup and state-transition diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,render=debug` - scoped filtering
//! - `RUST_LOG=quill::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/quill/logs/quill.log` with daily rotation,
//! always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::EditorState;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "quill.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Snapshot of the edit state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    pub row: usize,
    pub col: usize,
    pub line_count: usize,
    pub caps_lock: bool,
}

impl EditSnapshot {
    pub fn from_editor(editor: &EditorState) -> Self {
        Self {
            row: editor.cursor.row,
            col: editor.cursor.col,
            line_count: editor.buffer.line_count(),
            caps_lock: editor.caps_lock,
        }
    }

    /// Describe what changed between two snapshots, None if nothing did
    pub fn diff(&self, other: &EditSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if (self.row, self.col) != (other.row, other.col) {
            changes.push(format!(
                "cursor ({},{}) → ({},{})",
                self.row, self.col, other.row, other.col
            ));
        }
        if self.line_count != other.line_count {
            changes.push(format!("lines {} → {}", self.line_count, other.line_count));
        }
        if self.caps_lock != other.caps_lock {
            changes.push(format!("caps lock {}", if other.caps_lock { "on" } else { "off" }));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cursor;

    #[test]
    fn test_diff_reports_cursor_and_lines() {
        let mut editor = EditorState::with_text("ab", Cursor::new(0, 1));
        let before = EditSnapshot::from_editor(&editor);
        editor.new_line();
        let after = EditSnapshot::from_editor(&editor);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cursor (0,1) → (1,0)"));
        assert!(diff.contains("lines 1 → 2"));
    }

    #[test]
    fn test_diff_none_when_unchanged() {
        let editor = EditorState::new();
        let snapshot = EditSnapshot::from_editor(&editor);
        assert_eq!(snapshot.diff(&snapshot.clone()), None);
    }
}
