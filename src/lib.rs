//! quill - Elm-style line editor
//!
//! This crate provides the core types and logic for a small text editor:
//! a line buffer with a cursor, edit commands applied through `update`, and
//! keyword highlighting resolved against a color scheme.

pub mod canvas;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod render_feed;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::{EditCommand, Msg};
pub use model::AppModel;
pub use render_feed::EditorChar;
pub use theme::ColorScheme;
