//! Review checklist commands.

use crate::catalog::{filter_checklists, Checklist, ChecklistCategory, ChecklistCriteria, Choice};
use crate::cli::common::{confirmation, print_json, CliError, CliResult};
use crate::cli::context::Context;
use crate::models::{Text, UserRole};
use crate::progress::{ChecklistProgressTracker, Progress};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Health review checklists and your progress
#[derive(Args, Debug)]
pub struct ChecklistsArgs {
    #[command(subcommand)]
    command: ChecklistsCommand,
}

#[derive(Subcommand, Debug)]
enum ChecklistsCommand {
    /// List checklists with progress
    List(ChecklistsListArgs),
    /// Show one checklist
    Show(ChecklistsShowArgs),
    /// Tick or untick an item
    Toggle(ChecklistsToggleArgs),
    /// Untick every item in a checklist
    Reset(ChecklistsResetArgs),
}

/// List checklists with progress
#[derive(Args, Debug)]
pub struct ChecklistsListArgs {
    /// Free-text search over titles and items
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Item category (discussion, examination, investigation, referral) or "all"
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    category: Choice<ChecklistCategory>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one checklist
#[derive(Args, Debug)]
pub struct ChecklistsShowArgs {
    /// Checklist identifier (see `checklists list`)
    #[arg(value_name = "CHECKLIST")]
    checklist: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Tick or untick an item
#[derive(Args, Debug)]
pub struct ChecklistsToggleArgs {
    /// Checklist identifier
    #[arg(value_name = "CHECKLIST")]
    checklist: String,

    /// Item identifier (see `checklists show`)
    #[arg(value_name = "ITEM")]
    item: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Untick every item in a checklist
#[derive(Args, Debug)]
pub struct ChecklistsResetArgs {
    /// Checklist identifier
    #[arg(value_name = "CHECKLIST")]
    checklist: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ChecklistSummary<'a> {
    id: &'a str,
    title: &'a str,
    age_range: &'a str,
    progress: Progress,
    percent: usize,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ItemOutput<'a> {
    id: &'a str,
    text: &'a str,
    category: ChecklistCategory,
    professional_only: bool,
    completed: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SectionOutput<'a> {
    title: &'a str,
    items: Vec<ItemOutput<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ChecklistOutput<'a> {
    #[serde(flatten)]
    summary: ChecklistSummary<'a>,
    sections: Vec<SectionOutput<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ToggleOutput<'a> {
    checklist: &'a str,
    item: &'a str,
    completed: bool,
    progress: Progress,
}

impl ChecklistsArgs {
    /// Execute checklists subcommand
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        match &self.command {
            ChecklistsCommand::List(args) => args.execute(ctx),
            ChecklistsCommand::Show(args) => args.execute(ctx),
            ChecklistsCommand::Toggle(args) => args.execute(ctx),
            ChecklistsCommand::Reset(args) => args.execute(ctx),
        }
    }
}

impl ChecklistsListArgs {
    /// Execute list command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let role = ctx.roles().get();
        let tracker = ChecklistProgressTracker::new(ctx.store.clone());
        let criteria = ChecklistCriteria {
            text: self.search.clone(),
            category: self.category,
            role,
        };
        let checklists = filter_checklists(&ctx.catalog.checklists, &criteria);

        if self.json {
            let summaries: Vec<_> = checklists
                .iter()
                .map(|c| summary(c, tracker.completion_ratio(c, role)))
                .collect();
            return print_json(&summaries);
        }

        let surface = ctx.surface();
        println!(
            "{}",
            surface.heading(surface.pick("Health Review Checklists", "Health Check Lists"))
        );
        print!("{}", surface.gap());
        if checklists.is_empty() {
            println!(
                "{}",
                surface.muted(surface.pick("No checklists match your search.", "Nothing found."))
            );
        }
        for checklist in checklists {
            let progress = tracker.completion_ratio(checklist, role);
            println!(
                "{}  {}",
                surface.accent(surface.text(&checklist.title_text())),
                surface.muted(&format!("({})", checklist.id))
            );
            println!(
                "  {}: {}",
                surface.label(surface.pick("Age", "When")),
                checklist.age_range
            );
            println!("  {}", surface.progress_bar(progress));
            print!("{}", surface.gap());
        }
        Ok(())
    }
}

impl ChecklistsShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let checklist = find_checklist(ctx, &self.checklist)?;
        let role = ctx.roles().get();
        let tracker = ChecklistProgressTracker::new(ctx.store.clone());
        let completed = tracker.completed(&checklist.id);
        let progress = tracker.completion_ratio(checklist, role);

        if self.json {
            let sections = checklist
                .sections
                .iter()
                .map(|section| SectionOutput {
                    title: &section.title,
                    items: section
                        .items
                        .iter()
                        .filter(|item| item.visible_to(role))
                        .map(|item| ItemOutput {
                            id: &item.id,
                            text: &item.text,
                            category: item.category,
                            professional_only: item.professional_only,
                            completed: completed.contains(&item.id),
                        })
                        .collect(),
                })
                .filter(|section| !section.items.is_empty())
                .collect();
            return print_json(&ChecklistOutput {
                summary: summary(checklist, progress),
                sections,
            });
        }

        let surface = ctx.surface();
        println!("{}", surface.heading(surface.text(&checklist.title_text())));
        println!("{}", surface.progress_bar(progress));
        print!("{}", surface.gap());

        for section in &checklist.sections {
            let visible: Vec<_> = section.items.iter().filter(|i| i.visible_to(role)).collect();
            if visible.is_empty() {
                continue;
            }
            println!(
                "{}",
                surface.accent(surface.text(&Text::new(&section.title, &section.title_easy_read)))
            );
            for item in visible {
                let mut line = format!(
                    "  {} {}  {}",
                    surface.checkbox(completed.contains(&item.id)),
                    surface.body(surface.text(&item.text_pair())),
                    surface.muted(&format!("[{}]", item.id))
                );
                if item.professional_only {
                    line.push_str(&format!(" {}", surface.muted("(professional)")));
                }
                println!("{line}");
                print!("{}", surface.gap());
            }
            println!();
        }
        Ok(())
    }
}

impl ChecklistsToggleArgs {
    /// Execute toggle command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let checklist = find_checklist(ctx, &self.checklist)?;
        let role = ctx.roles().get();
        check_item(checklist, &self.item, role)?;

        let tracker = ChecklistProgressTracker::new(ctx.store.clone());
        let completed = tracker
            .toggle_item(&checklist.id, &self.item)
            .map_err(|e| CliError::io(format!("Failed to save progress: {e:#}")))?;
        let progress = tracker.completion_ratio(checklist, role);

        if self.json {
            return print_json(&ToggleOutput {
                checklist: &checklist.id,
                item: &self.item,
                completed,
                progress,
            });
        }

        let surface = ctx.surface();
        let message = if completed {
            surface.pick("Marked as done", "Done")
        } else {
            surface.pick("Marked as not done", "Not done")
        };
        println!("{}: {}", surface.success(message), self.item);
        println!("{}", surface.progress_bar(progress));
        Ok(())
    }
}

impl ChecklistsResetArgs {
    /// Execute reset command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let checklist = find_checklist(ctx, &self.checklist)?;
        let surface = ctx.surface();
        let prompt = Text::new(
            format!("Untick every item in '{}'?", checklist.title),
            format!("Start '{}' again?", checklist.title_easy_read),
        );
        if !confirmation(self.yes, surface).confirm(&prompt) {
            println!("{}", surface.muted(surface.pick("Cancelled.", "Nothing changed.")));
            return Ok(());
        }

        ChecklistProgressTracker::new(ctx.store.clone())
            .reset(&checklist.id)
            .map_err(|e| CliError::io(format!("Failed to save progress: {e:#}")))?;
        println!(
            "{}",
            surface.success(surface.pick("Checklist progress cleared.", "All ticks removed."))
        );
        Ok(())
    }
}

fn find_checklist<'a>(ctx: &'a Context, id: &str) -> CliResult<&'a Checklist> {
    ctx.catalog.checklist(id).ok_or_else(|| {
        let known: Vec<&str> = ctx.catalog.checklists.iter().map(|c| c.id.as_str()).collect();
        CliError::validation(format!(
            "Unknown checklist '{id}'. Available: {}",
            known.join(", ")
        ))
    })
}

fn check_item(checklist: &Checklist, item_id: &str, role: Option<UserRole>) -> CliResult<()> {
    match checklist.item(item_id) {
        Some(item) if item.visible_to(role) => Ok(()),
        Some(_) => Err(CliError::validation(format!(
            "Item '{item_id}' is only available to healthcare professionals"
        ))),
        None => Err(CliError::validation(format!(
            "Unknown item '{item_id}' in checklist '{}'",
            checklist.id
        ))),
    }
}

fn summary(checklist: &Checklist, progress: Progress) -> ChecklistSummary<'_> {
    ChecklistSummary {
        id: &checklist.id,
        title: &checklist.title,
        age_range: &checklist.age_range,
        progress,
        percent: progress.percent(),
    }
}
