//! Automatic narration of newly shown content.

use super::controller::SpeechController;
use crate::accessibility::AccessibilitySettings;

/// Decides when content that just became visible should be read aloud.
///
/// Plays only when `autoPlayTTS` is on, and only once per distinct text:
/// re-evaluating the same content does nothing.
#[derive(Debug, Default)]
pub struct AutoPlayGate {
    last_played: Option<String>,
}

impl AutoPlayGate {
    /// Creates a gate that has not played anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` should be auto-played now. Records it when so.
    pub fn admit(&mut self, settings: &AccessibilitySettings, text: &str) -> bool {
        if !settings.auto_play_tts || text.trim().is_empty() {
            return false;
        }
        if self.last_played.as_deref() == Some(text) {
            return false;
        }
        self.last_played = Some(text.to_string());
        true
    }

    /// Narrates `text` through `speech` if the gate admits it.
    pub fn content_shown(
        &mut self,
        speech: &mut SpeechController,
        settings: &AccessibilitySettings,
        text: &str,
    ) -> bool {
        if !speech.is_available() || !self.admit(settings, text) {
            return false;
        }
        speech.play(text, settings.speech_rate);
        true
    }
}
