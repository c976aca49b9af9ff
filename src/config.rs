//! Theme file loading.
//!
//! Themes are TOML files with `[colors]` and `[glyphs]` tables. Every key
//! is optional; present keys override the selected preset and pass
//! through to rendering unchanged. Color values are ANSI color names,
//! `#RRGGBB` hex, or a `0-255` palette index.
//!
//! Resolution order: the preset named on the command line (default
//! preset otherwise) as the base, then the overrides from an explicit
//! `--theme-file`, or from `<config dir>/nowbar/theme.toml` when that
//! file exists.

use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use tracing::debug;

use crate::theme::Theme;

/// Errors from theme resolution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read theme file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown color '{value}' for '{key}' (expected an ANSI color name, #RRGGBB, or 0-255)")]
    UnknownColor { key: &'static str, value: String },

    #[error("Unknown theme preset '{0}' (expected charcoal, classic, or ocean)")]
    UnknownPreset(String),
}

/// On-disk theme file schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    #[serde(default)]
    pub colors: ColorOverrides,
    #[serde(default)]
    pub glyphs: GlyphOverrides,
}

/// `[colors]` table - every key optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorOverrides {
    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
    pub accent: Option<String>,
    pub slider_filled: Option<String>,
    pub slider_empty: Option<String>,
    pub slider_thumb: Option<String>,
}

/// `[glyphs]` table - every key optional, one character each.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphOverrides {
    pub filled: Option<char>,
    pub empty: Option<char>,
    pub thumb: Option<char>,
}

/// Parse a color value: an ANSI name, `#RRGGBB` hex, or palette index.
pub fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        return Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8));
    }

    if let Ok(index) = value.parse::<u8>() {
        return Some(Color::Indexed(index));
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark-gray" | "dark-grey" => Some(Color::DarkGray),
        "lightred" | "light-red" => Some(Color::LightRed),
        "lightgreen" | "light-green" => Some(Color::LightGreen),
        "lightyellow" | "light-yellow" => Some(Color::LightYellow),
        "lightblue" | "light-blue" => Some(Color::LightBlue),
        "lightmagenta" | "light-magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light-cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn override_color(
    slot: &mut Color,
    key: &'static str,
    value: &Option<String>,
) -> Result<(), ConfigError> {
    if let Some(value) = value {
        *slot = parse_color(value).ok_or_else(|| ConfigError::UnknownColor {
            key,
            value: value.clone(),
        })?;
    }
    Ok(())
}

/// Apply a parsed theme file over a base theme.
///
/// Keys absent from the file keep the base value; present keys pass
/// through unchanged.
pub fn apply_overrides(file: &ThemeFile, mut base: Theme) -> Result<Theme, ConfigError> {
    let colors = &file.colors;
    override_color(&mut base.text_primary, "text_primary", &colors.text_primary)?;
    override_color(
        &mut base.text_secondary,
        "text_secondary",
        &colors.text_secondary,
    )?;
    override_color(&mut base.accent, "accent", &colors.accent)?;
    override_color(
        &mut base.slider_filled,
        "slider_filled",
        &colors.slider_filled,
    )?;
    override_color(&mut base.slider_empty, "slider_empty", &colors.slider_empty)?;
    override_color(&mut base.slider_thumb, "slider_thumb", &colors.slider_thumb)?;

    if let Some(filled) = file.glyphs.filled {
        base.glyphs.filled = filled;
    }
    if let Some(empty) = file.glyphs.empty {
        base.glyphs.empty = empty;
    }
    if let Some(thumb) = file.glyphs.thumb {
        base.glyphs.thumb = thumb;
    }

    Ok(base)
}

/// Read, parse, and apply a theme file over a base theme.
pub fn load_theme_file(path: &Path, base: Theme) -> Result<Theme, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let file: ThemeFile = toml::from_str(&raw)?;
    debug!(path = %path.display(), "loaded theme file");
    apply_overrides(&file, base)
}

/// Default theme file location: `<config dir>/nowbar/theme.toml`.
pub fn default_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nowbar").join("theme.toml"))
}

/// Resolve the effective theme from CLI selections.
///
/// `preset` picks the base (default preset when `None`); `file` overrides
/// it, falling back to the default theme file when one exists.
pub fn resolve_theme(preset: Option<&str>, file: Option<&Path>) -> Result<Theme, ConfigError> {
    let base = match preset {
        Some(name) => {
            Theme::preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?
        }
        None => Theme::default(),
    };

    if let Some(path) = file {
        return load_theme_file(path, base);
    }
    if let Some(path) = default_theme_path() {
        if path.is_file() {
            return load_theme_file(&path, base);
        }
    }
    Ok(base)
}
