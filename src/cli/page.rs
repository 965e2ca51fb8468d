//! Page introductions, read aloud when auto-play is on.

use crate::catalog::Page;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::context::Context;
use crate::cli::speak::narrate;
use crate::speech::{self, AutoPlayGate, SpeechState};
use clap::Args;
use serde::Serialize;

/// Show a page introduction (home, pathway, checklists, services, support,
/// emergency, my-info, about)
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page identifier
    #[arg(value_name = "PAGE", default_value = "home")]
    page: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    easy_read: bool,
}

impl PageArgs {
    /// Execute page command
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let page = find_page(ctx, &self.page)?;
        let surface = ctx.surface();
        let description = surface.text(&page.description);

        if self.json {
            return print_json(&PageOutput {
                id: &page.id,
                title: surface.text(&page.title),
                description,
                easy_read: surface.spacious(),
            });
        }

        println!("{}", surface.heading(surface.text(&page.title)));
        print!("{}", surface.gap());
        println!("{}", surface.body(description));

        let settings = ctx.preferences.settings();
        if !settings.auto_play_tts {
            return Ok(());
        }

        let mut controller = speech::controller_from_config(&ctx.config.speech);
        if !controller.is_available() {
            return Ok(());
        }
        let started = AutoPlayGate::new().content_shown(&mut controller, &settings, description);
        if started && controller.state() != SpeechState::Idle {
            print!("{}", surface.gap());
            narrate(
                &mut controller,
                surface,
                description,
                settings.speech_rate,
                false,
            )
            .await?;
        }
        Ok(())
    }
}

fn find_page<'a>(ctx: &'a Context, id: &str) -> CliResult<&'a Page> {
    ctx.catalog.page(id).ok_or_else(|| {
        let known: Vec<&str> = ctx.catalog.pages.iter().map(|p| p.id.as_str()).collect();
        CliError::validation(format!("Unknown page '{id}'. Available: {}", known.join(", ")))
    })
}
