//! Editor configuration
//!
//! Stored in `~/.config/quill/config.yaml`. Every field is optional; a missing
//! or broken file falls back to defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_TAB_WIDTH;
use crate::syntax::default_keywords;

/// Editor configuration read at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Color scheme file; the builtin default is used when unset
    #[serde(default)]
    pub color_scheme: Option<PathBuf>,

    /// Spaces inserted by Tab
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Substrings highlighted as keywords
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Monospace font file; common system fonts are tried when unset
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

fn default_font_size() -> f32 {
    16.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            color_scheme: None,
            tab_width: default_tab_width(),
            keywords: default_keywords(),
            font_size: default_font_size(),
            font_path: None,
        }
    }
}

impl EditorConfig {
    /// Parse config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("YAML parse error")?;
        Ok(config.sanitized())
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("{:#}", e);
            Self::default()
        })
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace values the editor cannot work with by their defaults
    fn sanitized(mut self) -> Self {
        if self.tab_width == 0 {
            tracing::warn!("tab_width must be at least 1, using {}", DEFAULT_TAB_WIDTH);
            self.tab_width = DEFAULT_TAB_WIDTH;
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            tracing::warn!("Invalid font_size {}, using default", self.font_size);
            self.font_size = default_font_size();
        }
        self
    }
}
