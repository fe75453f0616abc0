//! Command-line argument parsing for the editor
//!
//! Flags override the matching fields of the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

/// A small keyword-highlighting text editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A small keyword-highlighting text editor")]
pub struct CliArgs {
    /// Color scheme file (YAML)
    #[arg(long, value_name = "PATH")]
    pub color_scheme: Option<PathBuf>,

    /// Number of spaces inserted by Tab
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub tab_width: Option<u16>,

    /// Monospace font file (TTF/OTF)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Config file to use instead of ~/.config/quill/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Apply CLI overrides on top of a loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(path) = &self.color_scheme {
            config.color_scheme = Some(path.clone());
        }
        if let Some(width) = self.tab_width {
            config.tab_width = width as usize;
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let args = CliArgs::parse_from(["quill"]);
        assert!(args.color_scheme.is_none());
        assert!(args.tab_width.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_overrides_config() {
        let args = CliArgs::parse_from([
            "quill",
            "--color-scheme",
            "schemes/solar.yaml",
            "--tab-width",
            "2",
        ]);
        let mut config = EditorConfig::default();
        args.apply_to(&mut config);

        assert_eq!(config.tab_width, 2);
        assert_eq!(config.color_scheme, Some(PathBuf::from("schemes/solar.yaml")));
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_zero_tab_width_rejected() {
        assert!(CliArgs::try_parse_from(["quill", "--tab-width", "0"]).is_err());
    }
}
