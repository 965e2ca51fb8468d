//! Accessibility preferences: settings, derived display modes and the
//! service that keeps them in sync.

pub mod display;
pub mod preferences;
pub mod settings;

pub use display::{DisplayMode, Motion, PaletteMode, PresentationSurface, TypeScale};
pub use preferences::AccessibilityPreferences;
pub use settings::{
    clamp_speech_rate, AccessibilitySettings, SettingsPatch, DEFAULT_SPEECH_RATE,
    MAX_SPEECH_RATE, MIN_SPEECH_RATE,
};
