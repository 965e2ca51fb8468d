//! Personal information commands ("My Info").

use crate::cli::common::{confirmation, print_json, CliError, CliResult};
use crate::cli::context::Context;
use crate::models::{AgeStage, PersonalInfo, PersonalInfoPatch, PersonalInfoStore};
use crate::ui::TerminalSurface;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Your child's details and personal notes, kept on this device
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(subcommand)]
    command: InfoCommand,
}

#[derive(Subcommand, Debug)]
enum InfoCommand {
    /// Display saved information
    Show(InfoShowArgs),
    /// Change one or more fields
    Set(InfoSetArgs),
    /// Delete all saved information
    Clear(InfoClearArgs),
}

/// Display saved information
#[derive(Args, Debug)]
pub struct InfoShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change one or more fields
#[derive(Args, Debug)]
pub struct InfoSetArgs {
    /// Child's name
    #[arg(long, value_name = "NAME")]
    child_name: Option<String>,

    /// Date of birth (YYYY-MM-DD, empty to clear)
    #[arg(long, value_name = "DATE")]
    child_dob: Option<String>,

    /// Current pathway stage (antenatal, birth, birth-to-3, 3-to-5, 5-to-11,
    /// 11-to-18, transitions) or "none"
    #[arg(long, value_name = "STAGE")]
    stage: Option<String>,

    /// Free-text notes
    #[arg(long, value_name = "TEXT")]
    notes: Option<String>,
}

/// Delete all saved information
#[derive(Args, Debug)]
pub struct InfoClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

impl InfoArgs {
    /// Execute info subcommand
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        match &self.command {
            InfoCommand::Show(args) => args.execute(ctx),
            InfoCommand::Set(args) => args.execute(ctx),
            InfoCommand::Clear(args) => args.execute(ctx),
        }
    }
}

impl InfoShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let info = PersonalInfoStore::new(ctx.store.clone()).load();
        if self.json {
            return print_json(&info);
        }
        output_human_readable(ctx.surface(), &info);
        Ok(())
    }
}

impl InfoSetArgs {
    fn patch(&self) -> CliResult<PersonalInfoPatch> {
        if let Some(dob) = self.child_dob.as_deref().filter(|d| !d.is_empty()) {
            NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|_| {
                CliError::validation(format!("Invalid date of birth '{dob}'. Use YYYY-MM-DD"))
            })?;
        }

        let current_stage = match self.stage.as_deref() {
            None => None,
            Some("none" | "") => Some(None),
            Some(stage) => Some(Some(
                stage.parse::<AgeStage>().map_err(CliError::validation)?,
            )),
        };

        Ok(PersonalInfoPatch {
            child_name: self.child_name.clone(),
            child_dob: self.child_dob.clone(),
            current_stage,
            notes: self.notes.clone(),
        })
    }

    /// Execute set command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let patch = self.patch()?;
        if patch.is_empty() {
            return Err(CliError::validation(
                "At least one field must be specified: --child-name, --child-dob, --stage, or --notes",
            ));
        }

        let info = PersonalInfoStore::new(ctx.store.clone())
            .update(patch)
            .map_err(|e| CliError::io(format!("Failed to save information: {e:#}")))?;

        let surface = ctx.surface();
        println!(
            "{}",
            surface.success(surface.pick("Information saved.", "Saved."))
        );
        output_human_readable(surface, &info);
        Ok(())
    }
}

impl InfoClearArgs {
    /// Execute clear command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let surface = ctx.surface();
        let cleared = PersonalInfoStore::new(ctx.store.clone())
            .clear(confirmation(self.yes, surface).as_mut())
            .map_err(|e| CliError::io(format!("Failed to clear information: {e:#}")))?;

        if cleared {
            println!(
                "{}",
                surface.success(surface.pick("Information cleared.", "Deleted."))
            );
        } else {
            println!("{}", surface.muted(surface.pick("Cancelled.", "Nothing changed.")));
        }
        Ok(())
    }
}

fn output_human_readable(surface: &TerminalSurface, info: &PersonalInfo) {
    println!("{}", surface.heading(surface.pick("My Information", "About Me")));
    print!("{}", surface.gap());

    if info.is_blank() {
        println!(
            "{}",
            surface.muted(surface.pick("Nothing saved yet.", "You have not saved anything yet."))
        );
        return;
    }

    let not_set = surface.pick("(not set)", "(empty)");
    let or_not_set = |value: &str| {
        if value.is_empty() {
            surface.muted(not_set)
        } else {
            surface.body(value)
        }
    };

    println!(
        "  {}: {}",
        surface.label(surface.pick("Child's name", "Name")),
        or_not_set(&info.child_name)
    );
    println!(
        "  {}: {}",
        surface.label(surface.pick("Date of birth", "Birthday")),
        or_not_set(&info.child_dob)
    );
    let stage = info
        .current_stage
        .map(|s| surface.text(&s.label()).to_string())
        .unwrap_or_default();
    println!(
        "  {}: {}",
        surface.label(surface.pick("Current stage", "Where we are now")),
        or_not_set(&stage)
    );
    print!("{}", surface.gap());
    println!("{}", surface.label(surface.pick("Notes", "My notes")));
    if info.notes.is_empty() {
        println!("  {}", surface.muted(not_set));
    } else {
        for line in info.notes.lines() {
            println!("  {}", surface.body(line));
        }
    }
}
