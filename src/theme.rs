//! Colour and size themes

use std::fmt;

use crate::error::{Error, Result};

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. `#1E1E1E`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Recognized theme names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    /// Dark background
    #[default]
    Dark,
    /// Light background
    Light,
}

/// Structured colour and size configuration for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Grid background
    pub background: Rgb,
    /// Cell text
    pub foreground: Rgb,
    /// Column header background
    pub header_background: Rgb,
    /// Column header text
    pub header_foreground: Rgb,
    /// Drill-down affordance text
    pub accent: Rgb,
    /// Selected row background
    pub selection_background: Rgb,
    /// Selected row text
    pub selection_foreground: Rgb,
    /// Status and summary text
    pub muted: Rgb,
    /// Font size in points
    pub font_size: u16,
    /// Row height in pixels
    pub row_height: u16,
}

impl Theme {
    /// The dark theme
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            background: Rgb(0x1E, 0x1E, 0x1E),
            foreground: Rgb(0xD4, 0xD4, 0xD4),
            header_background: Rgb(0x2D, 0x2D, 0x30),
            header_foreground: Rgb(0xFF, 0xFF, 0xFF),
            accent: Rgb(0x56, 0x9C, 0xD6),
            selection_background: Rgb(0x26, 0x4F, 0x78),
            selection_foreground: Rgb(0xFF, 0xFF, 0xFF),
            muted: Rgb(0x85, 0x85, 0x85),
            font_size: 12,
            row_height: 24,
        }
    }

    /// The light theme
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            background: Rgb(0xFF, 0xFF, 0xFF),
            foreground: Rgb(0x1E, 0x1E, 0x1E),
            header_background: Rgb(0xF3, 0xF3, 0xF3),
            header_foreground: Rgb(0x00, 0x00, 0x00),
            accent: Rgb(0x00, 0x66, 0xB8),
            selection_background: Rgb(0xCC, 0xE8, 0xFF),
            selection_foreground: Rgb(0x00, 0x00, 0x00),
            muted: Rgb(0x6E, 0x6E, 0x6E),
            font_size: 12,
            row_height: 24,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Resolve a theme by name, case-insensitively.
///
/// Only `Dark` and `Light` are recognized.
pub fn resolve_theme(name: &str) -> Result<Theme> {
    match name.trim().to_ascii_lowercase().as_str() {
        "dark" => Ok(Theme::dark()),
        "light" => Ok(Theme::light()),
        _ => Err(Error::unknown_theme(name)),
    }
}
