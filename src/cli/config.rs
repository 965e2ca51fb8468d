//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory for saved preferences and progress
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// How often narration is checked for completion, in milliseconds
    #[arg(long, value_name = "MS")]
    poll_interval_ms: Option<u64>,

    /// Preferred voice language (e.g. en-GB)
    #[arg(long, value_name = "LANG")]
    voice_lang: Option<String>,

    /// Speech synthesiser executable (espeak-ng compatible)
    #[arg(long, value_name = "PATH")]
    speech_command: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    storage: StorageOutput,
    speech: SpeechOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct SpeechOutput {
    poll_interval_ms: u64,
    voice_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let data_dir = config
            .storage
            .resolved_data_dir()
            .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;

        let output = ConfigOutput {
            storage: StorageOutput {
                data_dir: data_dir.to_string_lossy().to_string(),
            },
            speech: SpeechOutput {
                poll_interval_ms: config.speech.poll_interval_ms,
                voice_lang: config.speech.voice_lang.clone(),
                command: config
                    .speech
                    .command
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            ui: UiOutput {
                theme: config.ui.theme_mode.to_string(),
            },
        };

        if self.json {
            return print_json(&output);
        }

        output_human_readable(&output);
        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.data_dir.is_none()
            && self.theme.is_none()
            && self.poll_interval_ms.is_none()
            && self.voice_lang.is_none()
            && self.speech_command.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-dir, --theme, \
                 --poll-interval-ms, --voice-lang, or --speech-command",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.data_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {e}",
                    path.display()
                ))
            })?;
            config.storage.data_dir = Some(path.clone());
        }

        if let Some(theme) = self.theme {
            config.ui.theme_mode = theme;
        }

        if let Some(ms) = self.poll_interval_ms {
            config.speech.poll_interval_ms = ms;
        }

        if let Some(lang) = &self.voice_lang {
            config.speech.voice_lang.clone_from(lang);
        }

        if let Some(command) = &self.speech_command {
            config.speech.command = Some(command.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("DS Pathway Configuration");
    println!("========================");
    println!();

    println!("Storage:");
    println!("  Data Directory: {}", output.storage.data_dir);
    println!();

    println!("Speech:");
    println!("  Poll Interval: {} ms", output.speech.poll_interval_ms);
    println!("  Voice Language: {}", output.speech.voice_lang);
    println!(
        "  Synthesiser: {}",
        output.speech.command.as_deref().unwrap_or("(auto-detect)")
    );
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!();
}
