//! Color scheme loading tests

use std::io::Write;

use quill::theme::{load_color_scheme, load_configured_scheme, Color, ColorScheme, BUILTIN_SCHEMES};
use tempfile::NamedTempFile;

const CUSTOM_SCHEME: &str = r##"
version: 1
name: "Custom"
author: "tests"
editor:
  background: "#101010"
  foreground: "#EEEEEE"
syntax:
  keyword: "#FF8800"
  comment: "#00FF0080"
"##;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_all_builtin_schemes_parse() {
    for builtin in BUILTIN_SCHEMES {
        let scheme = ColorScheme::from_builtin(builtin.id)
            .unwrap_or_else(|e| panic!("builtin '{}' failed: {:#}", builtin.id, e));
        assert!(scheme.has_role("keyword"), "{} lacks keyword", builtin.id);
    }
}

#[test]
fn test_unknown_builtin_is_an_error() {
    assert!(ColorScheme::from_builtin("does-not-exist").is_err());
}

#[test]
fn test_load_scheme_from_file() {
    let file = write_temp(CUSTOM_SCHEME);
    let scheme = load_color_scheme(file.path()).unwrap();

    assert_eq!(scheme.name, "Custom");
    assert_eq!(scheme.editor.background, Color::rgb(0x10, 0x10, 0x10));
    assert_eq!(scheme.color_for_role("keyword"), Color::rgb(0xFF, 0x88, 0x00));
    assert_eq!(
        scheme.color_for_role("comment"),
        Color::rgba(0x00, 0xFF, 0x00, 0x80)
    );
    // Optional editor colors fall back to background/foreground
    assert_eq!(scheme.editor.current_line_background, scheme.editor.background);
    assert_eq!(scheme.editor.cursor, scheme.editor.foreground);
}

#[test]
fn test_unknown_role_falls_back_to_foreground() {
    let scheme = ColorScheme::from_yaml(CUSTOM_SCHEME).unwrap();
    assert!(!scheme.has_role("string"));
    assert_eq!(scheme.color_for_role("string"), scheme.editor.foreground);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_color_scheme(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.yaml"));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let file = write_temp("editor: [not, a, map");
    assert!(load_color_scheme(file.path()).is_err());
}

#[test]
fn test_invalid_color_is_an_error() {
    let file = write_temp(&CUSTOM_SCHEME.replace("#FF8800", "#GG8800"));
    let err = load_color_scheme(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("keyword"));
}

#[test]
fn test_configured_scheme_defaults_to_builtin() {
    let scheme = load_configured_scheme(None).unwrap();
    assert_eq!(scheme.name, "Default");
}
