//! Backup, restore and reset commands.

use crate::backup::{self, BackupError};
use crate::cli::common::{confirmation, print_json, CliError, CliResult};
use crate::cli::context::Context;
use crate::cli::role::print_easy_read_notice;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Back up, restore or delete everything saved on this device
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    command: DataCommand,
}

#[derive(Subcommand, Debug)]
enum DataCommand {
    /// Save a backup file
    Export(DataExportArgs),
    /// Restore from a backup file
    Import(DataImportArgs),
    /// Delete all saved data
    Clear(DataClearArgs),
}

/// Save a backup file
#[derive(Args, Debug)]
pub struct DataExportArgs {
    /// Output file (defaults to ds-pathway-backup-YYYY-MM-DD.json)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the backup instead of writing a file
    #[arg(long)]
    stdout: bool,
}

/// Restore from a backup file
#[derive(Args, Debug)]
pub struct DataImportArgs {
    /// Backup file to restore
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output the import report as JSON
    #[arg(long)]
    json: bool,
}

/// Delete all saved data
#[derive(Args, Debug)]
pub struct DataClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ImportOutput {
    #[serde(flatten)]
    report: backup::ImportReport,
    easy_read_enabled: bool,
}

impl DataArgs {
    /// Execute data subcommand
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        match &self.command {
            DataCommand::Export(args) => args.execute(ctx),
            DataCommand::Import(args) => args.execute(ctx),
            DataCommand::Clear(args) => args.execute(ctx),
        }
    }
}

impl DataExportArgs {
    /// Execute export command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let document = backup::export(&ctx.store);
        let json = document
            .to_json()
            .map_err(|e| CliError::io(format!("Failed to serialize backup: {e}")))?;

        if self.stdout {
            println!("{json}");
            return Ok(());
        }

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(backup::file_name_today()));
        fs::write(&path, format!("{json}\n")).map_err(|e| {
            CliError::io(format!("Failed to write backup {}: {e}", path.display()))
        })?;

        let surface = ctx.surface();
        println!(
            "{} {}",
            surface.success(surface.pick("Backup saved to", "Saved a copy to")),
            path.display()
        );
        Ok(())
    }
}

impl DataImportArgs {
    /// Execute import command
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        let text = fs::read_to_string(&self.file).map_err(|e| {
            CliError::io(format!("Failed to read backup {}: {e}", self.file.display()))
        })?;

        let surface = ctx.surface();
        let report = backup::import(&ctx.store, &text).map_err(|e| match e {
            BackupError::Storage(e) => CliError::io(format!("Failed to restore backup: {e:#}")),
            malformed => CliError::validation(format!(
                "{} ({malformed})",
                surface.pick("Error loading backup file", "Could not load file")
            )),
        })?;

        // A restored role is a role change like `role set`
        let role = ctx.roles().get();
        let easy_read_enabled = ctx
            .preferences
            .observe_role(role)
            .map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))?;

        if self.json {
            return print_json(&ImportOutput {
                report,
                easy_read_enabled,
            });
        }

        let surface = ctx.surface();
        println!(
            "{} {}",
            surface.success(surface.pick("Backup restored. Entries written:", "Loaded:")),
            report.written.len()
        );
        for entry in &report.skipped {
            println!(
                "  {} {}: {}",
                surface.warning(surface.pick("Skipped", "Not loaded")),
                entry.key,
                surface.muted(&entry.reason)
            );
        }
        if easy_read_enabled {
            print_easy_read_notice(surface);
        }
        Ok(())
    }
}

impl DataClearArgs {
    /// Execute clear command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let surface = ctx.surface();
        let cleared = backup::clear_all(&ctx.store, confirmation(self.yes, surface).as_mut())
            .map_err(|e| CliError::io(format!("Failed to clear data: {e:#}")))?;

        if cleared {
            println!(
                "{}",
                surface.success(surface.pick("All saved data deleted.", "Everything is deleted."))
            );
        } else {
            println!("{}", surface.muted(surface.pick("Cancelled.", "Nothing changed.")));
        }
        Ok(())
    }
}
