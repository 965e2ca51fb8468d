//! Narration through an external synthesiser process (`espeak-ng`/`espeak`).

use super::engine::{SpeechEngine, Utterance, Voice};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Synthesiser programs tried in order when none is configured.
pub const DEFAULT_PROGRAMS: [&str; 2] = ["espeak-ng", "espeak"];

/// espeak's default speed in words per minute, used for rate 1.0.
const BASE_WORDS_PER_MINUTE: f64 = 175.0;

/// Runs one synthesiser process per utterance.
#[derive(Debug)]
pub struct CommandEngine {
    program: PathBuf,
    child: Mutex<Option<Child>>,
}

impl CommandEngine {
    /// Uses `program` as the synthesiser.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            child: Mutex::new(None),
        }
    }

    /// Path of the synthesiser program.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn child(&self) -> MutexGuard<'_, Option<Child>> {
        self.child.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(unix)]
    fn signal(&self, signal: &str) {
        let guard = self.child();
        let Some(child) = guard.as_ref() else {
            return;
        };
        let status = Command::new("kill")
            .arg(format!("-{signal}"))
            .arg(child.id().to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Err(e) = status {
            warn!(signal, error = %e, "Failed to signal synthesiser");
        }
    }

    #[cfg(not(unix))]
    fn signal(&self, _signal: &str) {}
}

impl SpeechEngine for CommandEngine {
    fn voices(&self) -> Vec<Voice> {
        match Command::new(&self.program).arg("--voices").output() {
            Ok(output) => parse_voice_list(&String::from_utf8_lossy(&output.stdout)),
            Err(e) => {
                warn!(error = %e, "Failed to list synthesiser voices");
                Vec::new()
            }
        }
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        self.cancel();

        let mut command = Command::new(&self.program);
        command
            .arg("-s")
            .arg(words_per_minute(utterance.rate).to_string())
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(voice) = &utterance.voice {
            command.arg("-v").arg(voice.lang.to_ascii_lowercase());
        }

        let mut child = command.spawn().context(format!(
            "Failed to start synthesiser: {}",
            self.program.display()
        ))?;

        debug!(pid = child.id(), "Synthesiser started");
        let stdin = child.stdin.take();
        // Tracked before the write, which can fail and must still reap it
        *self.child() = Some(child);

        if let Some(mut stdin) = stdin {
            if let Err(e) = stdin.write_all(utterance.text.as_bytes()) {
                drop(stdin);
                self.cancel();
                return Err(e).context("Failed to send text to synthesiser");
            }
        }
        Ok(())
    }

    fn pause(&self) {
        self.signal("STOP");
    }

    fn resume(&self) {
        self.signal("CONT");
    }

    fn cancel(&self) {
        let Some(mut child) = self.child().take() else {
            return;
        };
        // A stopped process must be continued before it can exit.
        #[cfg(unix)]
        let _ = Command::new("kill")
            .arg("-CONT")
            .arg(child.id().to_string())
            .status();
        let _ = child.kill();
        let _ = child.wait();
    }

    fn is_speaking(&self) -> bool {
        let mut guard = self.child();
        let Some(child) = guard.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(_)) | Err(_) => {
                *guard = None;
                false
            }
        }
    }
}

/// Finds a synthesiser: the configured program if given, else the first of
/// [`DEFAULT_PROGRAMS`] on `PATH`. Returns `None` when narration is unavailable.
#[must_use]
pub fn detect_engine(configured: Option<&Path>) -> Option<Arc<dyn SpeechEngine>> {
    let program = match configured {
        Some(path) => resolve_program(path),
        None => DEFAULT_PROGRAMS
            .iter()
            .find_map(|name| resolve_program(Path::new(name))),
    };

    match program {
        Some(program) => {
            debug!(program = %program.display(), "Using synthesiser");
            Some(Arc::new(CommandEngine::new(program)))
        }
        None => {
            debug!("No speech synthesiser found");
            None
        }
    }
}

fn resolve_program(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        return program.is_file().then(|| program.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        let exe = candidate.with_extension("exe");
        exe.is_file().then_some(exe)
    })
}

/// Converts a rate multiplier to espeak's `-s` speed.
fn words_per_minute(rate: f64) -> u32 {
    // Rates are clamped to 0.5..=2.0 upstream, so this stays within 87..=350.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let wpm = (BASE_WORDS_PER_MINUTE * rate).round().max(1.0) as u32;
    wpm
}

/// Parses `espeak --voices` output.
///
/// Columns: `Pty Language Age/Gender VoiceName File Other Languages`.
fn parse_voice_list(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            match columns.as_slice() {
                [_, lang, _, name, ..] => Some(Voice::new(*name, *lang)),
                _ => None,
            }
        })
        .collect()
}
