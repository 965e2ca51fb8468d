//! Text-to-speech: the engine boundary, the playback state machine and
//! auto-play gating.

pub mod autoplay;
pub mod command;
pub mod controller;
pub mod engine;

pub use autoplay::AutoPlayGate;
pub use command::{detect_engine, CommandEngine};
pub use controller::{SpeechController, SpeechState, DEFAULT_POLL_INTERVAL, DEFAULT_VOICE_LANG};
pub use engine::{select_voice, SpeechEngine, Utterance, Voice};

use crate::config::SpeechConfig;
use std::time::Duration;

/// Builds a controller from configuration, detecting the synthesiser.
#[must_use]
pub fn controller_from_config(config: &SpeechConfig) -> SpeechController {
    SpeechController::new(detect_engine(config.command.as_deref()))
        .with_poll_interval(Duration::from_millis(config.poll_interval_ms))
        .with_voice_lang(config.voice_lang.clone())
}
