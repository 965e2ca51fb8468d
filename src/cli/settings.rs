//! Accessibility settings commands.

use crate::accessibility::{AccessibilitySettings, SettingsPatch};
use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::context::Context;
use crate::ui::TerminalSurface;
use clap::builder::BoolishValueParser;
use clap::{Args, Subcommand};
use serde::Serialize;

/// View and change accessibility settings
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Display current settings
    Show(SettingsShowArgs),
    /// Change one or more settings
    Set(SettingsSetArgs),
    /// Restore the default settings
    Reset(SettingsResetArgs),
}

/// Display current settings
#[derive(Args, Debug)]
pub struct SettingsShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change one or more settings
#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    /// Simpler words and more spacing (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = BoolishValueParser::new())]
    easy_read: Option<bool>,

    /// Make all text bigger (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = BoolishValueParser::new())]
    large_text: Option<bool>,

    /// High-contrast colors (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = BoolishValueParser::new())]
    high_contrast: Option<bool>,

    /// Turn off animations (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = BoolishValueParser::new())]
    reduce_motion: Option<bool>,

    /// Reading speed, 0.5 to 2.0 (values outside are clamped)
    #[arg(long, value_name = "RATE")]
    speech_rate: Option<f64>,

    /// Read pages aloud automatically (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = BoolishValueParser::new())]
    auto_play: Option<bool>,

    /// Output the resulting settings as JSON
    #[arg(long)]
    json: bool,
}

/// Restore the default settings
#[derive(Args, Debug)]
pub struct SettingsResetArgs {
    /// Output the resulting settings as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SettingsOutput {
    #[serde(flatten)]
    settings: AccessibilitySettings,
    active_modes: Vec<&'static str>,
}

impl SettingsArgs {
    /// Execute settings subcommand
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        match &self.command {
            SettingsCommand::Show(args) => args.execute(ctx),
            SettingsCommand::Set(args) => args.execute(ctx),
            SettingsCommand::Reset(args) => args.execute(ctx),
        }
    }
}

impl SettingsShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        output(ctx, ctx.preferences.settings(), self.json)
    }
}

impl SettingsSetArgs {
    fn patch(&self) -> SettingsPatch {
        SettingsPatch {
            easy_read: self.easy_read,
            large_text: self.large_text,
            high_contrast: self.high_contrast,
            reduce_motion: self.reduce_motion,
            speech_rate: self.speech_rate,
            auto_play_tts: self.auto_play,
        }
    }

    /// Execute set command
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        let patch = self.patch();
        if patch.is_empty() {
            return Err(CliError::validation(
                "At least one setting must be specified: --easy-read, --large-text, \
                 --high-contrast, --reduce-motion, --speech-rate, or --auto-play",
            ));
        }

        let settings = ctx
            .preferences
            .update_settings(patch)
            .map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))?;

        if !self.json {
            let surface = ctx.surface();
            println!(
                "{}",
                surface.success(surface.pick("Settings updated.", "Your settings are saved."))
            );
        }
        output(ctx, settings, self.json)
    }
}

impl SettingsResetArgs {
    /// Execute reset command
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        let settings = ctx
            .preferences
            .reset_settings()
            .map_err(|e| CliError::io(format!("Failed to reset settings: {e:#}")))?;

        if !self.json {
            let surface = ctx.surface();
            println!(
                "{}",
                surface.success(surface.pick(
                    "Settings restored to defaults.",
                    "Settings are back to normal."
                ))
            );
        }
        output(ctx, settings, self.json)
    }
}

fn output(ctx: &Context, settings: AccessibilitySettings, json: bool) -> CliResult<()> {
    if json {
        print_json(&SettingsOutput {
            settings,
            active_modes: ctx.preferences.display_mode().active_modes(),
        })
    } else {
        output_human_readable(ctx.surface(), &settings);
        Ok(())
    }
}

fn output_human_readable(surface: &TerminalSurface, settings: &AccessibilitySettings) {
    println!(
        "{}",
        surface.heading(surface.pick("Accessibility Settings", "How the guide looks"))
    );
    print!("{}", surface.gap());

    let rows = [
        (
            surface.pick("Easy Read Mode", "Easy words"),
            on_off(surface, settings.easy_read),
        ),
        (
            surface.pick("Large Text", "Bigger text"),
            on_off(surface, settings.large_text),
        ),
        (
            surface.pick("High Contrast", "Strong colours"),
            on_off(surface, settings.high_contrast),
        ),
        (
            surface.pick("Reduce Motion", "Less moving"),
            on_off(surface, settings.reduce_motion),
        ),
        (
            surface.pick("Reading Speed", "How fast I read"),
            format!("{:.1}x", settings.speech_rate),
        ),
        (
            surface.pick("Auto-read pages", "Read pages out loud"),
            on_off(surface, settings.auto_play_tts),
        ),
    ];

    for (label, value) in rows {
        println!("  {}: {}", surface.label(label), surface.body(&value));
        print!("{}", surface.gap());
    }
}

fn on_off(surface: &TerminalSurface, value: bool) -> String {
    let text = if value {
        surface.pick("on", "yes")
    } else {
        surface.pick("off", "no")
    };
    text.to_string()
}
