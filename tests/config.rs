//! Editor config file tests

use std::io::Write;
use std::path::PathBuf;

use quill::config::EditorConfig;
use quill::model::{AppModel, DEFAULT_TAB_WIDTH};
use quill::theme::ColorScheme;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_temp(
        r#"
color_scheme: /tmp/scheme.yaml
tab_width: 2
keywords: [while, return]
font_size: 20.0
"#,
    );
    let config = EditorConfig::load_from(file.path()).unwrap();

    assert_eq!(config.color_scheme, Some(PathBuf::from("/tmp/scheme.yaml")));
    assert_eq!(config.tab_width, 2);
    assert_eq!(config.keywords, vec!["while", "return"]);
    assert_eq!(config.font_size, 20.0);
    assert_eq!(config.font_path, None);
}

#[test]
fn test_empty_mapping_uses_defaults() {
    let file = write_temp("{}");
    let config = EditorConfig::load_from(file.path()).unwrap();

    assert_eq!(config.tab_width, DEFAULT_TAB_WIDTH);
    assert_eq!(config.keywords, vec!["for", "unsigned", "int", "char"]);
    assert!(config.color_scheme.is_none());
}

#[test]
fn test_invalid_values_are_sanitized() {
    let config = EditorConfig::from_yaml("tab_width: 0\nfont_size: -3.0").unwrap();
    assert_eq!(config.tab_width, DEFAULT_TAB_WIDTH);
    assert!(config.font_size > 0.0);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(EditorConfig::load_from(&dir.path().join("config.yaml")).is_err());
}

#[test]
fn test_config_drives_model() {
    let config = EditorConfig::from_yaml("tab_width: 8\nkeywords: [x]").unwrap();
    let mut model = AppModel::new(config, ColorScheme::default(), (640, 480));
    model.editor.insert_tab();
    model.editor.insert_char('x');

    assert_eq!(model.editor.buffer.to_string(), "        x");
    let rendered = model.current_line_render_sequence();
    assert_eq!(rendered[8].color, model.scheme.color_for_role("keyword"));
}
