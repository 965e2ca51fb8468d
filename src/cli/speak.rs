//! Read-aloud command and the narration loop shared with `page`.

use crate::accessibility::clamp_speech_rate;
use crate::cli::common::{CliError, CliResult};
use crate::cli::context::Context;
use crate::speech::{self, SpeechController, SpeechState};
use crate::ui::TerminalSurface;
use clap::Args;
use crossterm::cursor::MoveToColumn;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Read text aloud
#[derive(Args, Debug)]
pub struct SpeakArgs {
    /// Text to read
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    text: Vec<String>,

    /// Reading speed for this narration (defaults to the saved setting)
    #[arg(long, value_name = "RATE")]
    rate: Option<f64>,

    /// Control playback from stdin: p = pause, r = resume, s = stop
    #[arg(short, long)]
    interactive: bool,
}

impl SpeakArgs {
    /// Execute speak command
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let text = self.text.join(" ");
        if text.trim().is_empty() {
            return Err(CliError::validation("Nothing to read"));
        }

        let mut controller = speech::controller_from_config(&ctx.config.speech);
        let surface = ctx.surface();
        if !controller.is_available() {
            print_unavailable(surface);
            return Ok(());
        }

        let rate = self
            .rate
            .map_or_else(|| ctx.preferences.settings().speech_rate, clamp_speech_rate);
        controller.play(&text, rate);
        if controller.state() == SpeechState::Idle {
            return Err(CliError::io("Failed to start narration"));
        }
        narrate(&mut controller, surface, &text, rate, self.interactive).await
    }
}

/// Tells the user narration cannot happen here. Not an error.
pub fn print_unavailable(surface: &TerminalSurface) {
    println!(
        "{}",
        surface.muted(surface.pick(
            "Read aloud is not available: no speech synthesiser (espeak-ng or espeak) was found.",
            "Reading out loud does not work on this computer."
        ))
    );
}

/// Waits for narration to finish, handling Ctrl-C and, when `interactive`,
/// playback commands on stdin.
pub async fn narrate(
    controller: &mut SpeechController,
    surface: &TerminalSurface,
    text: &str,
    rate: f64,
    interactive: bool,
) -> CliResult<()> {
    if interactive {
        println!(
            "{}",
            surface.muted(surface.pick(
                "Type p to pause, r to resume, s to stop, then press Enter.",
                "Type p (pause), r (play) or s (stop), then Enter."
            ))
        );
    }

    let mut commands = interactive.then(|| BufReader::new(tokio::io::stdin()).lines());
    let mut indicator = ActivityIndicator::new(surface);
    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(100));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match controller.state() {
                    SpeechState::Idle => break,
                    SpeechState::Playing => indicator.tick(),
                    SpeechState::Paused => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                controller.stop();
                break;
            }
            line = next_command(&mut commands) => {
                match line.as_deref().map(str::trim) {
                    Some("p") => controller.pause(),
                    Some("r") => controller.play(text, rate),
                    Some("s") | None => {
                        controller.stop();
                        break;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    indicator.clear();
    Ok(())
}

/// Next line from stdin; never resolves when stdin commands are off.
///
/// End of input counts as a stop.
async fn next_command(commands: &mut Option<Lines<BufReader<Stdin>>>) -> Option<String> {
    match commands {
        Some(lines) => lines.next_line().await.ok().flatten(),
        None => std::future::pending().await,
    }
}

/// "Reading..." line with a spinner, skipped when output is not a terminal.
struct ActivityIndicator<'a> {
    surface: &'a TerminalSurface,
    enabled: bool,
    shown: bool,
    tick: usize,
}

impl<'a> ActivityIndicator<'a> {
    fn new(surface: &'a TerminalSurface) -> Self {
        Self {
            surface,
            enabled: io::stdout().is_tty(),
            shown: false,
            tick: 0,
        }
    }

    fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        let label = self.surface.pick("Reading aloud...", "Reading...");
        let line = match self.surface.activity_frame(self.tick) {
            Some(frame) => format!("{frame} {label}"),
            // Reduced motion: a static label, drawn once
            None if self.shown => return,
            None => label.to_string(),
        };
        self.tick += 1;
        self.shown = true;
        let mut stdout = io::stdout();
        let _ = crossterm::queue!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(self.surface.muted(&line))
        );
        let _ = stdout.flush();
    }

    fn clear(&mut self) {
        if !self.shown {
            return;
        }
        let mut stdout = io::stdout();
        let _ = crossterm::queue!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine));
        let _ = stdout.flush();
        self.shown = false;
    }
}
