//! The narration capability the controller drives.

use anyhow::Result;

/// A voice offered by a narration engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Engine-specific voice name
    pub name: String,
    /// BCP 47 language tag as reported by the engine (e.g. "en-GB", "en-gb")
    pub lang: String,
}

impl Voice {
    /// Creates a voice description.
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One request to narrate text.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to read
    pub text: String,
    /// Rate multiplier (1.0 = engine default)
    pub rate: f64,
    /// Requested language tag
    pub lang: String,
    /// Chosen voice, or `None` for the engine default
    pub voice: Option<Voice>,
}

/// External text-to-speech capability.
///
/// Implementations only need to be fire-and-forget: the controller learns
/// about completion by polling [`SpeechEngine::is_speaking`].
pub trait SpeechEngine: Send + Sync {
    /// Voices the engine can use.
    fn voices(&self) -> Vec<Voice>;

    /// Starts narrating `utterance`.
    fn speak(&self, utterance: &Utterance) -> Result<()>;

    /// Suspends narration at the current position.
    fn pause(&self);

    /// Continues suspended narration.
    fn resume(&self);

    /// Cancels current and queued narration.
    fn cancel(&self);

    /// Whether narration is in progress (paused narration may report either way).
    fn is_speaking(&self) -> bool;
}

/// Picks the first voice whose language is `lang` or a variant of it
/// (case-insensitive), e.g. "en-GB" matches "en-gb" and "en-GB-x-rp".
#[must_use]
pub fn select_voice(voices: &[Voice], lang: &str) -> Option<Voice> {
    let wanted = lang.to_ascii_lowercase();
    voices
        .iter()
        .find(|voice| {
            let have = voice.lang.to_ascii_lowercase();
            have == wanted || have.starts_with(&wanted)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_voice_prefers_british_english() {
        let voices = vec![
            Voice::new("US", "en-US"),
            Voice::new("British", "en-GB"),
            Voice::new("British RP", "en-GB-x-rp"),
        ];
        assert_eq!(select_voice(&voices, "en-GB").unwrap().name, "British");
    }

    #[test]
    fn test_select_voice_is_case_insensitive() {
        let voices = vec![Voice::new("english", "en-gb")];
        assert!(select_voice(&voices, "en-GB").is_some());
    }

    #[test]
    fn test_select_voice_prefix_match() {
        let voices = vec![Voice::new("rp", "en-GB-x-rp")];
        assert_eq!(select_voice(&voices, "en-GB").unwrap().name, "rp");
    }

    #[test]
    fn test_select_voice_none_available() {
        let voices = vec![Voice::new("US", "en-US"), Voice::new("French", "fr-FR")];
        assert_eq!(select_voice(&voices, "en-GB"), None);
        assert_eq!(select_voice(&[], "en-GB"), None);
    }
}
