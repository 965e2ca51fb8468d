//! The accessibility settings record.

use serde::{Deserialize, Deserializer, Serialize};

/// Slowest allowed narration rate.
pub const MIN_SPEECH_RATE: f64 = 0.5;
/// Fastest allowed narration rate.
pub const MAX_SPEECH_RATE: f64 = 2.0;
/// Default narration rate.
pub const DEFAULT_SPEECH_RATE: f64 = 1.0;

/// User-adjustable accessibility settings.
///
/// Stored as camelCase JSON. Partial records are completed with defaults and
/// `speechRate` is clamped to [`MIN_SPEECH_RATE`]..=[`MAX_SPEECH_RATE`] on
/// every read and write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    /// Simplified vocabulary and spacing
    pub easy_read: bool,
    /// Scaled typography
    pub large_text: bool,
    /// Restricted, high-contrast palette
    pub high_contrast: bool,
    /// Suppress animation
    pub reduce_motion: bool,
    /// Narration rate multiplier
    #[serde(deserialize_with = "deserialize_speech_rate")]
    pub speech_rate: f64,
    /// Read new content aloud automatically
    #[serde(rename = "autoPlayTTS")]
    pub auto_play_tts: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            easy_read: false,
            large_text: false,
            high_contrast: false,
            reduce_motion: false,
            speech_rate: DEFAULT_SPEECH_RATE,
            auto_play_tts: false,
        }
    }
}

impl AccessibilitySettings {
    /// Applies the supplied fields of `patch`, clamping the speech rate.
    #[must_use]
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        if let Some(v) = patch.easy_read {
            self.easy_read = v;
        }
        if let Some(v) = patch.large_text {
            self.large_text = v;
        }
        if let Some(v) = patch.high_contrast {
            self.high_contrast = v;
        }
        if let Some(v) = patch.reduce_motion {
            self.reduce_motion = v;
        }
        if let Some(v) = patch.speech_rate {
            self.speech_rate = v;
        }
        if let Some(v) = patch.auto_play_tts {
            self.auto_play_tts = v;
        }
        self.normalized()
    }

    /// Returns a copy with the speech rate forced into range.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.speech_rate = clamp_speech_rate(self.speech_rate);
        self
    }
}

/// Partial update to [`AccessibilitySettings`]. `None` fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsPatch {
    /// New easy-read flag
    pub easy_read: Option<bool>,
    /// New large-text flag
    pub large_text: Option<bool>,
    /// New high-contrast flag
    pub high_contrast: Option<bool>,
    /// New reduce-motion flag
    pub reduce_motion: Option<bool>,
    /// New speech rate (clamped when applied)
    pub speech_rate: Option<f64>,
    /// New auto-play flag
    pub auto_play_tts: Option<bool>,
}

impl SettingsPatch {
    /// Patch that only sets the easy-read flag.
    #[must_use]
    pub const fn easy_read(value: bool) -> Self {
        Self {
            easy_read: Some(value),
            large_text: None,
            high_contrast: None,
            reduce_motion: None,
            speech_rate: None,
            auto_play_tts: None,
        }
    }

    /// True when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.easy_read.is_none()
            && self.large_text.is_none()
            && self.high_contrast.is_none()
            && self.reduce_motion.is_none()
            && self.speech_rate.is_none()
            && self.auto_play_tts.is_none()
    }
}

/// Clamps a rate into the supported range. Non-finite values become the default.
#[must_use]
pub fn clamp_speech_rate(rate: f64) -> f64 {
    if rate.is_finite() {
        rate.clamp(MIN_SPEECH_RATE, MAX_SPEECH_RATE)
    } else {
        DEFAULT_SPEECH_RATE
    }
}

fn deserialize_speech_rate<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    f64::deserialize(d).map(clamp_speech_rate)
}
