//! Theme system for consistent terminal colors across dark, light and
//! high-contrast modes.
//!
//! The base theme follows the OS (dark/light) unless the configuration pins
//! one. High contrast replaces the base theme entirely while active.

use crate::config::ThemeMode;
use crossterm::style::Color;

/// Semantic color theme for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Headings and emphasis
    pub primary: Color,
    /// Highlights and selections
    pub accent: Color,
    /// Confirmations and completed items
    pub success: Color,
    /// Errors and destructive actions
    pub error: Color,
    /// Warnings
    pub warning: Color,
    /// Body text
    pub text: Color,
    /// Labels and less important content
    pub text_secondary: Color,
    /// Help text and dim content
    pub text_muted: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark terminal backgrounds
    Dark,
    /// Light terminal backgrounds
    Light,
    /// Restricted palette for low vision
    HighContrast,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            text_secondary: Color::Grey,
            text_muted: Color::DarkGrey,
        }
    }

    /// Light theme.
    ///
    /// All colors meet WCAG AA contrast requirements (4.5:1 minimum).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb { r: 180, g: 100, b: 0 },
            success: Color::Rgb { r: 0, g: 128, b: 0 },
            error: Color::Red,
            warning: Color::Rgb { r: 200, g: 100, b: 0 },
            text: Color::Black,
            text_secondary: Color::Rgb { r: 60, g: 60, b: 60 },
            text_muted: Color::Rgb { r: 90, g: 90, b: 90 },
        }
    }

    /// High-contrast theme: white text, yellow emphasis, no dim shades.
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::Yellow,
            accent: Color::Yellow,
            success: Color::White,
            error: Color::Yellow,
            warning: Color::Yellow,
            text: Color::White,
            text_secondary: Color::White,
            text_muted: Color::White,
        }
    }

    /// Creates a theme from a variant enum.
    #[must_use]
    pub const fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
            ThemeVariant::HighContrast => Self::high_contrast(),
        }
    }

    /// Returns the theme variant for the current theme.
    #[must_use]
    pub fn variant(&self) -> ThemeVariant {
        if *self == Self::high_contrast() {
            ThemeVariant::HighContrast
        } else if self.text == Color::Black {
            ThemeVariant::Light
        } else {
            ThemeVariant::Dark
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
