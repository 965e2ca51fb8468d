//! Presentation modes derived from settings.
//!
//! Each settings flag maps to one independent mode. The mapping is a pure
//! function, so applying the same settings twice yields the same mode and
//! switching a flag off reverts its mode completely.

use super::settings::AccessibilitySettings;
use crate::models::TextRegister;
use serde::Serialize;

/// Typography scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeScale {
    /// Regular size
    #[default]
    Normal,
    /// Scaled-up text
    Large,
}

/// Colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteMode {
    /// Full palette
    #[default]
    Standard,
    /// Restricted, high-contrast palette
    HighContrast,
}

/// Animation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motion {
    /// Animations allowed
    #[default]
    Full,
    /// Animations suppressed
    Reduced,
}

/// Everything the rendering layer needs to know about accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMode {
    /// Wording register
    pub register: TextRegister,
    /// Typography scale
    pub type_scale: TypeScale,
    /// Palette
    pub palette: PaletteMode,
    /// Animation policy
    pub motion: Motion,
}

impl DisplayMode {
    /// Names of the active non-default modes (e.g. "easy-read", "high-contrast").
    #[must_use]
    pub fn active_modes(&self) -> Vec<&'static str> {
        let mut modes = Vec::new();
        if self.register == TextRegister::EasyRead {
            modes.push("easy-read");
        }
        if self.type_scale == TypeScale::Large {
            modes.push("large-text");
        }
        if self.palette == PaletteMode::HighContrast {
            modes.push("high-contrast");
        }
        if self.motion == Motion::Reduced {
            modes.push("reduce-motion");
        }
        modes
    }
}

impl From<&AccessibilitySettings> for DisplayMode {
    fn from(settings: &AccessibilitySettings) -> Self {
        Self {
            register: if settings.easy_read {
                TextRegister::EasyRead
            } else {
                TextRegister::Standard
            },
            type_scale: if settings.large_text {
                TypeScale::Large
            } else {
                TypeScale::Normal
            },
            palette: if settings.high_contrast {
                PaletteMode::HighContrast
            } else {
                PaletteMode::Standard
            },
            motion: if settings.reduce_motion {
                Motion::Reduced
            } else {
                Motion::Full
            },
        }
    }
}

/// The rendering layer, as seen by the preferences engine.
pub trait PresentationSurface {
    /// Makes `mode` the current presentation. Must be idempotent.
    fn apply(&mut self, mode: DisplayMode);
}

/// Surface that only remembers the last applied mode.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ModeCell {
    /// Most recently applied mode
    pub current: DisplayMode,
}

#[cfg(test)]
impl PresentationSurface for ModeCell {
    fn apply(&mut self, mode: DisplayMode) {
        self.current = mode;
    }
}
