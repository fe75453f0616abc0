//! Color schemes for the editor
//!
//! A color scheme maps semantic roles (keyword, plain text, background, ...)
//! to colors. Schemes are YAML files; a default scheme is compiled into the
//! binary and used when no path is configured.
//!
//! The scheme is loaded once at startup and is read-only afterwards. Failing
//! to load a configured scheme is fatal to startup.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

// Embed scheme YAML files at compile time
pub const DEFAULT_SCHEME_YAML: &str = include_str!("../colorschemes/default.yaml");
pub const LIGHT_SCHEME_YAML: &str = include_str!("../colorschemes/light.yaml");

/// A built-in color scheme entry
pub struct BuiltinScheme {
    /// Stable identifier (e.g. "default", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in schemes
pub const BUILTIN_SCHEMES: &[BuiltinScheme] = &[
    BuiltinScheme {
        id: "default",
        yaml: DEFAULT_SCHEME_YAML,
    },
    BuiltinScheme {
        id: "light",
        yaml: LIGHT_SCHEME_YAML,
    },
];

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("Invalid color format: {}", s);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("Invalid color format: {}", s))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Raw scheme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ColorSchemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub editor: EditorColorsData,
    /// Role name → hex color
    #[serde(default)]
    pub syntax: HashMap<String, String>,
}

/// Editor area colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct EditorColorsData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub current_line_background: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Editor colors (resolved)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorColors {
    pub background: Color,
    /// Plain text color, also the fallback for unknown roles
    pub foreground: Color,
    pub current_line_background: Color,
    pub cursor: Color,
}

/// Resolved color scheme with parsed colors
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub name: String,
    pub editor: EditorColors,
    syntax: HashMap<String, Color>,
}

impl ColorScheme {
    /// Load a scheme from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: ColorSchemeData = serde_yaml::from_str(yaml).context("YAML parse error")?;
        Self::from_data(data)
    }

    /// Load a built-in scheme by id
    pub fn from_builtin(id: &str) -> Result<Self> {
        let entry = BUILTIN_SCHEMES
            .iter()
            .find(|s| s.id == id)
            .with_context(|| format!("Unknown color scheme id: {}", id))?;
        Self::from_yaml(entry.yaml)
    }

    /// Convert raw scheme data to a resolved scheme
    pub fn from_data(data: ColorSchemeData) -> Result<Self> {
        let background = Color::from_hex(&data.editor.background)?;
        let foreground = Color::from_hex(&data.editor.foreground)?;

        let current_line_background = data
            .editor
            .current_line_background
            .as_deref()
            .map(Color::from_hex)
            .transpose()?
            .unwrap_or(background);
        let cursor = data
            .editor
            .cursor
            .as_deref()
            .map(Color::from_hex)
            .transpose()?
            .unwrap_or(foreground);

        let syntax = data
            .syntax
            .iter()
            .map(|(role, hex)| {
                Color::from_hex(hex)
                    .with_context(|| format!("Invalid color for role '{}'", role))
                    .map(|color| (role.clone(), color))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(ColorScheme {
            name: data.name,
            editor: EditorColors {
                background,
                foreground,
                current_line_background,
                cursor,
            },
            syntax,
        })
    }

    /// Color for a semantic role; unknown roles use the plain text color
    pub fn color_for_role(&self, role: &str) -> Color {
        self.syntax
            .get(role)
            .copied()
            .unwrap_or(self.editor.foreground)
    }

    /// True if the scheme defines a color for `role`
    pub fn has_role(&self, role: &str) -> bool {
        self.syntax.contains_key(role)
    }

    /// The embedded default scheme, with a hardcoded fallback
    pub fn default_dark() -> Self {
        match Self::from_yaml(DEFAULT_SCHEME_YAML) {
            Ok(scheme) => scheme,
            Err(_) => ColorScheme {
                name: "Default".to_string(),
                editor: EditorColors {
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                    current_line_background: Color::rgb(0x2A, 0x2A, 0x2A),
                    cursor: Color::rgb(0xFF, 0xFF, 0xFF),
                },
                syntax: HashMap::from([("keyword".to_string(), Color::rgb(0x56, 0x9C, 0xD6))]),
            },
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// Load a color scheme from a YAML file
pub fn load_color_scheme(path: &Path) -> Result<ColorScheme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read color scheme {}", path.display()))?;
    let scheme = ColorScheme::from_yaml(&content)
        .with_context(|| format!("Failed to parse color scheme {}", path.display()))?;
    tracing::info!("Loaded color scheme '{}' from {}", scheme.name, path.display());
    Ok(scheme)
}

/// Resolve the scheme for startup: the configured file if any, else the default
pub fn load_configured_scheme(path: Option<&Path>) -> Result<ColorScheme> {
    match path {
        Some(path) => load_color_scheme(path),
        None => {
            tracing::info!("Using builtin color scheme: default");
            ColorScheme::from_builtin("default")
        }
    }
}
