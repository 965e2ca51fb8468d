//! Play/pause/resume/stop state machine over a [`SpeechEngine`].

use super::engine::{select_voice, SpeechEngine, Utterance};
use crate::accessibility::clamp_speech_rate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// How often the engine is asked whether it is still speaking.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Preferred narration language.
pub const DEFAULT_VOICE_LANG: &str = "en-GB";

/// Narration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechState {
    /// Nothing is being read
    #[default]
    Idle,
    /// Narration in progress
    Playing,
    /// Narration suspended, can be resumed
    Paused,
}

#[derive(Debug, Default)]
struct Session {
    state: SpeechState,
    text: Option<String>,
    rate: f64,
    /// Bumped whenever a session starts or ends, so a poll belonging to an
    /// earlier session can never change a later one.
    generation: u64,
}

impl Session {
    fn end(&mut self) {
        self.state = SpeechState::Idle;
        self.text = None;
        self.generation += 1;
    }
}

/// Wraps a narration engine in an explicit state machine.
///
/// The engine gives no dependable "finished" signal, so while `Playing` the
/// controller samples [`SpeechEngine::is_speaking`] every poll interval on
/// the current tokio runtime and drops to `Idle` the first time it reports
/// idle. The sampling task is aborted on every transition away from
/// `Playing`.
///
/// Without an engine the controller stays `Idle` and every command is a no-op.
pub struct SpeechController {
    engine: Option<Arc<dyn SpeechEngine>>,
    session: Arc<Mutex<Session>>,
    poller: Option<JoinHandle<()>>,
    poll_interval: Duration,
    voice_lang: String,
}

impl SpeechController {
    /// Controller over `engine`; `None` gives the permanently idle controller.
    #[must_use]
    pub fn new(engine: Option<Arc<dyn SpeechEngine>>) -> Self {
        Self {
            engine,
            session: Arc::new(Mutex::new(Session::default())),
            poller: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            voice_lang: DEFAULT_VOICE_LANG.to_string(),
        }
    }

    /// Controller for hosts without narration.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    /// Sets the completion polling interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Sets the preferred voice language.
    #[must_use]
    pub fn with_voice_lang(mut self, lang: impl Into<String>) -> Self {
        self.voice_lang = lang.into();
        self
    }

    /// Whether narration is possible at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SpeechState {
        self.session().state
    }

    /// Text of the active session, if any.
    #[must_use]
    pub fn current_text(&self) -> Option<String> {
        self.session().text.clone()
    }

    /// Rate the active session was started with.
    #[must_use]
    pub fn current_rate(&self) -> Option<f64> {
        let session = self.session();
        session.text.as_ref().map(|_| session.rate)
    }

    /// Reads `text` aloud at `rate`.
    ///
    /// - `Idle`: starts a new session.
    /// - `Paused` on the same text: resumes where it stopped.
    /// - `Playing` the same text: no-op.
    /// - Any other active session is cancelled before the new one starts.
    pub fn play(&mut self, text: &str, rate: f64) {
        let Some(engine) = self.engine.clone() else {
            return;
        };

        let (state, same_text) = {
            let session = self.session();
            (session.state, session.text.as_deref() == Some(text))
        };

        match (state, same_text) {
            (SpeechState::Playing, true) => return,
            (SpeechState::Paused, true) => {
                self.resume();
                return;
            }
            (SpeechState::Idle, _) => {}
            _ => self.stop(),
        }

        // Clears anything the engine may still have queued.
        engine.cancel();

        let rate = clamp_speech_rate(rate);
        let utterance = Utterance {
            text: text.to_string(),
            rate,
            lang: self.voice_lang.clone(),
            voice: select_voice(&engine.voices(), &self.voice_lang),
        };

        if let Err(e) = engine.speak(&utterance) {
            warn!(error = %e, "Narration failed to start");
            return;
        }

        {
            let mut session = self.session();
            session.generation += 1;
            session.state = SpeechState::Playing;
            session.text = Some(utterance.text);
            session.rate = rate;
        }
        debug!(rate, voice = ?utterance.voice, "Narration started");
        self.start_polling();
    }

    /// Suspends narration. Only valid while `Playing`.
    pub fn pause(&mut self) {
        let Some(engine) = self.engine.clone() else {
            return;
        };
        if self.state() != SpeechState::Playing {
            return;
        }

        self.stop_polling();
        engine.pause();
        self.session().state = SpeechState::Paused;
        debug!("Narration paused");
    }

    /// Continues a paused session. Only valid while `Paused`.
    pub fn resume(&mut self) {
        let Some(engine) = self.engine.clone() else {
            return;
        };
        if self.state() != SpeechState::Paused {
            return;
        }

        engine.resume();
        self.session().state = SpeechState::Playing;
        debug!("Narration resumed");
        self.start_polling();
    }

    /// Cancels any narration and returns to `Idle`. Safe in every state.
    pub fn stop(&mut self) {
        self.stop_polling();
        if let Some(engine) = &self.engine {
            engine.cancel();
        }
        let mut session = self.session();
        if session.state != SpeechState::Idle {
            debug!("Narration stopped");
        }
        session.end();
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start_polling(&mut self) {
        self.stop_polling();

        let Some(engine) = self.engine.clone() else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime; narration completion will not be detected");
            return;
        };

        let session = Arc::clone(&self.session);
        let generation = self.session().generation;
        let period = self.poll_interval;

        self.poller = Some(runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; give the engine one period to start.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if engine.is_speaking() {
                    continue;
                }

                let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
                if session.generation == generation && session.state == SpeechState::Playing {
                    session.end();
                    debug!("Narration finished");
                }
                break;
            }
        }));
    }

    fn stop_polling(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        if self.state() != SpeechState::Idle {
            self.stop();
        }
        self.stop_polling();
    }
}

impl std::fmt::Debug for SpeechController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechController")
            .field("available", &self.is_available())
            .field("state", &self.state())
            .field("poll_interval", &self.poll_interval)
            .field("voice_lang", &self.voice_lang)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::engine::Voice;
    use anyhow::Result;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Speak(Utterance),
        Pause,
        Resume,
        Cancel,
    }

    #[derive(Default)]
    struct FakeEngine {
        speaking: AtomicBool,
        voices: Vec<Voice>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeEngine {
        fn with_voices(voices: Vec<Voice>) -> Self {
            Self {
                voices,
                ..Self::default()
            }
        }

        fn finish(&self) {
            self.speaking.store(false, Ordering::SeqCst);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn speak_count(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::Speak(_)))
                .count()
        }
    }

    impl SpeechEngine for FakeEngine {
        fn voices(&self) -> Vec<Voice> {
            self.voices.clone()
        }

        fn speak(&self, utterance: &Utterance) -> Result<()> {
            self.speaking.store(true, Ordering::SeqCst);
            self.calls.lock().unwrap().push(Call::Speak(utterance.clone()));
            Ok(())
        }

        fn pause(&self) {
            self.calls.lock().unwrap().push(Call::Pause);
        }

        fn resume(&self) {
            self.calls.lock().unwrap().push(Call::Resume);
        }

        fn cancel(&self) {
            self.speaking.store(false, Ordering::SeqCst);
            self.calls.lock().unwrap().push(Call::Cancel);
        }

        fn is_speaking(&self) -> bool {
            self.speaking.load(Ordering::SeqCst)
        }
    }

    fn controller() -> (Arc<FakeEngine>, SpeechController) {
        let engine = Arc::new(FakeEngine::default());
        let controller = SpeechController::new(Some(engine.clone()));
        (engine, controller)
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_starts_session() {
        let (engine, mut speech) = controller();
        speech.play("hello", 1.2);

        assert_eq!(speech.state(), SpeechState::Playing);
        assert_eq!(speech.current_text().as_deref(), Some("hello"));
        assert_eq!(speech.current_rate(), Some(1.2));
        assert_eq!(engine.speak_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_uses_british_voice_when_available() {
        let engine = Arc::new(FakeEngine::with_voices(vec![
            Voice::new("us", "en-US"),
            Voice::new("gb", "en-GB"),
        ]));
        let mut speech = SpeechController::new(Some(engine.clone()));
        speech.play("hello", 1.0);

        let spoken = engine.calls().into_iter().find_map(|c| match c {
            Call::Speak(u) => Some(u),
            _ => None,
        });
        let utterance = spoken.unwrap();
        assert_eq!(utterance.voice.unwrap().name, "gb");
        assert_eq!(utterance.lang, "en-GB");
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_falls_back_to_default_voice() {
        let (engine, mut speech) = controller();
        speech.play("hello", 1.0);
        let voice = engine.calls().into_iter().find_map(|c| match c {
            Call::Speak(u) => Some(u.voice),
            _ => None,
        });
        assert_eq!(voice, Some(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_clamps_rate() {
        let (_engine, mut speech) = controller();
        speech.play("fast", 4.0);
        assert_eq!(speech.current_rate(), Some(2.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_while_playing_is_noop() {
        let (engine, mut speech) = controller();
        speech.play("a", 1.0);
        speech.play("a", 1.0);
        assert_eq!(engine.speak_count(), 1);
        assert_eq!(speech.state(), SpeechState::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_then_play_resumes_without_restart() {
        let (engine, mut speech) = controller();
        speech.play("a", 1.0);
        speech.pause();
        assert_eq!(speech.state(), SpeechState::Paused);

        speech.play("a", 1.0);
        assert_eq!(speech.state(), SpeechState::Playing);
        assert_eq!(engine.speak_count(), 1);
        assert_eq!(engine.calls().last(), Some(&Call::Resume));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_outside_playing_is_noop() {
        let (engine, mut speech) = controller();
        speech.pause();
        assert_eq!(speech.state(), SpeechState::Idle);
        assert!(engine.calls().is_empty());

        speech.play("a", 1.0);
        speech.pause();
        speech.pause();
        let pauses = engine.calls().iter().filter(|c| **c == Call::Pause).count();
        assert_eq!(pauses, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_only_from_paused() {
        let (engine, mut speech) = controller();
        speech.resume();
        assert_eq!(speech.state(), SpeechState::Idle);

        speech.play("a", 1.0);
        speech.resume();
        assert!(!engine.calls().contains(&Call::Resume));

        speech.pause();
        speech.resume();
        assert_eq!(speech.state(), SpeechState::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_from_every_state_ends_idle() {
        let (_engine, mut speech) = controller();
        speech.stop();
        assert_eq!(speech.state(), SpeechState::Idle);

        speech.play("a", 1.0);
        speech.stop();
        assert_eq!(speech.state(), SpeechState::Idle);
        assert_eq!(speech.current_text(), None);

        speech.play("a", 1.0);
        speech.pause();
        speech.stop();
        assert_eq!(speech.state(), SpeechState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_text_cancels_previous_session() {
        let (engine, mut speech) = controller();
        speech.play("first", 1.0);
        speech.play("second", 1.0);

        assert_eq!(engine.speak_count(), 2);
        assert_eq!(speech.current_text().as_deref(), Some("second"));
        let calls = engine.calls();
        let second_speak = calls
            .iter()
            .rposition(|c| matches!(c, Call::Speak(_)))
            .unwrap();
        assert_eq!(calls[second_speak - 1], Call::Cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_text_while_paused_starts_fresh() {
        let (engine, mut speech) = controller();
        speech.play("first", 1.0);
        speech.pause();
        speech.play("second", 1.0);

        assert_eq!(speech.state(), SpeechState::Playing);
        assert_eq!(engine.speak_count(), 2);
        assert!(!engine.calls().contains(&Call::Resume));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_detected_within_one_interval() {
        let (engine, mut speech) = controller();
        speech.play("a", 1.0);

        wait(250).await;
        assert_eq!(speech.state(), SpeechState::Playing);

        engine.finish();
        wait(DEFAULT_POLL_INTERVAL.as_millis() as u64 + 10).await;
        assert_eq!(speech.state(), SpeechState::Idle);

        // No further transitions without a new play
        engine.speaking.store(true, Ordering::SeqCst);
        wait(500).await;
        assert_eq!(speech.state(), SpeechState::Idle);
        assert_eq!(engine.speak_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_sampling() {
        let (engine, mut speech) = controller();
        speech.play("a", 1.0);
        speech.pause();

        engine.finish();
        wait(500).await;
        assert_eq!(speech.state(), SpeechState::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_poll_cannot_end_new_session() {
        let (engine, mut speech) = controller();
        speech.play("first", 1.0);
        speech.stop();
        speech.play("second", 1.0);

        wait(350).await;
        assert_eq!(speech.state(), SpeechState::Playing);
        assert_eq!(speech.current_text().as_deref(), Some("second"));

        engine.finish();
        wait(150).await;
        assert_eq!(speech.state(), SpeechState::Idle);
    }

    #[test]
    fn test_unavailable_controller_is_inert() {
        let mut speech = SpeechController::unavailable();
        assert!(!speech.is_available());
        speech.play("a", 1.0);
        assert_eq!(speech.state(), SpeechState::Idle);
        speech.pause();
        speech.resume();
        speech.stop();
        assert_eq!(speech.state(), SpeechState::Idle);
    }

    #[test]
    fn test_play_without_runtime_does_not_panic() {
        let engine = Arc::new(FakeEngine::default());
        let mut speech = SpeechController::new(Some(engine.clone()));
        speech.play("a", 1.0);
        assert_eq!(speech.state(), SpeechState::Playing);
        speech.stop();
        assert_eq!(speech.state(), SpeechState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_narration() {
        let (engine, mut speech) = controller();
        speech.play("a", 1.0);
        drop(speech);
        assert_eq!(engine.calls().last(), Some(&Call::Cancel));
        assert!(!engine.is_speaking());
    }
}
