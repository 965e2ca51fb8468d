//! Role selection commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::context::Context;
use crate::models::UserRole;
use crate::ui::TerminalSurface;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Choose who the guide is for
#[derive(Args, Debug)]
pub struct RoleArgs {
    #[command(subcommand)]
    command: RoleCommand,
}

#[derive(Subcommand, Debug)]
enum RoleCommand {
    /// Display the current role
    Show(RoleShowArgs),
    /// Choose a role (parent-carer, young-person, professional, educator)
    Set(RoleSetArgs),
    /// Forget the chosen role
    Clear,
}

/// Display the current role
#[derive(Args, Debug)]
pub struct RoleShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Choose a role
#[derive(Args, Debug)]
pub struct RoleSetArgs {
    /// Role identifier
    #[arg(value_name = "ROLE")]
    role: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RoleOutput {
    role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    easy_read_enabled: Option<bool>,
}

impl RoleArgs {
    /// Execute role subcommand
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        match &self.command {
            RoleCommand::Show(args) => args.execute(ctx),
            RoleCommand::Set(args) => args.execute(ctx),
            RoleCommand::Clear => change_role(ctx, None, false),
        }
    }
}

impl RoleShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let role = ctx.roles().get();
        if self.json {
            return print_json(&RoleOutput {
                role,
                label: role.map(|r| r.label().standard),
                easy_read_enabled: None,
            });
        }

        let surface = ctx.surface();
        match role {
            Some(role) => {
                println!(
                    "{}: {} ({})",
                    surface.label(surface.pick("Role", "You are")),
                    surface.body(surface.text(&role.label())),
                    role
                );
                println!("{}", surface.text(&role.greeting()));
            }
            None => println!(
                "{}",
                surface.muted(surface.pick(
                    "No role chosen. Use 'role set <ROLE>' to choose one.",
                    "You have not said who you are yet."
                ))
            ),
        }
        Ok(())
    }
}

impl RoleSetArgs {
    /// Execute set command
    pub fn execute(&self, ctx: &mut Context) -> CliResult<()> {
        let role: UserRole = self.role.parse().map_err(CliError::validation)?;
        change_role(ctx, Some(role), self.json)
    }
}

fn change_role(ctx: &mut Context, role: Option<UserRole>, json: bool) -> CliResult<()> {
    ctx.roles()
        .set(role)
        .map_err(|e| CliError::io(format!("Failed to save role: {e:#}")))?;

    let easy_read_enabled = ctx
        .preferences
        .observe_role(role)
        .map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))?;

    if json {
        return print_json(&RoleOutput {
            role,
            label: role.map(|r| r.label().standard),
            easy_read_enabled: Some(easy_read_enabled),
        });
    }

    let surface = ctx.surface();
    match role {
        Some(role) => {
            println!(
                "{} {}",
                surface.success(surface.pick("Role set to", "You are now")),
                surface.body(surface.text(&role.label()))
            );
            println!("{}", surface.text(&role.greeting()));
        }
        None => println!(
            "{}",
            surface.success(surface.pick("Role cleared.", "Role removed."))
        ),
    }
    if easy_read_enabled {
        print_easy_read_notice(surface);
    }
    Ok(())
}

/// Tells the user easy-read was switched on for them.
pub fn print_easy_read_notice(surface: &TerminalSurface) {
    println!(
        "{}",
        surface.accent(surface.pick(
            "Easy Read mode has been turned on. Use 'settings set --easy-read off' to turn it off.",
            "Easy Read is on."
        ))
    );
}
