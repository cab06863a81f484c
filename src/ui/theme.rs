//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme used by the renderer, supporting both
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `kbase-dark`: Dark theme with pink accents (default)
//! - `kbase-light`: Light theme for bright terminal backgrounds
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! search_border = "#cba6f7"
//! search_fg = "#cdd6f4"
//! selection_fg = "#f5c2e7"
//! item_fg = "#cdd6f4"
//! description_fg = "#7f849c"
//! text_dim = "#6c7086"
//! detail_border = "#6c7086"
//! detail_title_fg = "#89b4fa"
//! example_fg = "#a6e3a1"
//! status_fg = "#6c7086"
//! status_success_fg = "#a6e3a1"
//! error_border = "#f38ba8"
//! error_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use kbase::ui::theme::Theme;
//!
//! let theme = Theme::from_name("kbase-dark").unwrap();
//! println!("{}", Theme::fg(&theme.colors.selection_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::KbaseError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "kbase-dark";

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: &[&str] = &["kbase-dark", "kbase-light"];

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Search box border.
    pub search_border: String,
    /// Search box text.
    pub search_fg: String,

    /// Selected row text (rendered bold).
    pub selection_fg: String,
    /// Unselected command text.
    pub item_fg: String,
    /// Description column.
    pub description_fg: String,
    /// Dimmed text (empty list message).
    pub text_dim: String,

    /// Detail panel border.
    pub detail_border: String,
    /// Detail panel "Examples:" title.
    pub detail_title_fg: String,
    /// Example lines in the detail panel.
    pub example_fg: String,

    /// Help text in the status line.
    pub status_fg: String,
    /// Transient status messages.
    pub status_success_fg: String,

    /// Error box border.
    pub error_border: String,
    /// Error title and text.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names are listed in [`BUILTIN_THEMES`].
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "kbase-dark" => include_str!("../../themes/kbase-dark.toml"),
            "kbase-light" => include_str!("../../themes/kbase-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`KbaseError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing colors).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KbaseError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            KbaseError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            KbaseError::Theme(format!("failed to parse theme file {}: {e}", path.display()))
        })
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kbase::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`kbase-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in kbase-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(&theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#1e1e2e"), (0x1e, 0x1e, 0x2e));
        assert_eq!(Theme::hex_to_rgb("1e1e2e"), (0x1e, 0x1e, 0x2e));
        assert_eq!(Theme::hex_to_rgb("#fff"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#zzzzzz"), (255, 255, 255));
    }

    #[test]
    fn custom_theme_from_file() {
        let builtin = include_str!("../../themes/kbase-light.toml")
            .replace("name = \"kbase-light\"", "name = \"custom\"");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(builtin.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn incomplete_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nitem_fg = \"#ffffff\"\n")
            .unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, KbaseError::Theme(_)));
    }
}
