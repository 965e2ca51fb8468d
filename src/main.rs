//! DS Pathway - accessible terminal guide to the Down Syndrome care pathway
//!
//! Everything is stored locally: role, accessibility settings, personal
//! notes and checklist progress never leave the device.

use clap::{Parser, Subcommand};
use ds_pathway::cli::{
    ChecklistsArgs, CliResult, ConfigArgs, Context, DataArgs, InfoArgs, PageArgs, RoleArgs,
    ServicesArgs, SettingsArgs, SpeakArgs, SupportArgs,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// DS Pathway - guide to the Down Syndrome pathway for Stockton and Hartlepool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a page introduction, read aloud when auto-play is on
    Page(PageArgs),
    /// Choose who you are
    Role(RoleArgs),
    /// Accessibility settings
    Settings(SettingsArgs),
    /// Search local NHS services
    Services(ServicesArgs),
    /// Search support organisations and resources
    Support(SupportArgs),
    /// Health review checklists
    Checklists(ChecklistsArgs),
    /// Your saved information
    Info(InfoArgs),
    /// Read text aloud
    Speak(SpeakArgs),
    /// Back up, restore or delete saved data
    Data(DataArgs),
    /// Application configuration
    Config(ConfigArgs),
}

impl Command {
    async fn execute(&self) -> CliResult<()> {
        // Configuration is managed without opening storage
        if let Self::Config(args) = self {
            return args.execute();
        }

        let mut ctx = Context::load()?;
        match self {
            Self::Page(args) => args.execute(&ctx).await,
            Self::Role(args) => args.execute(&mut ctx),
            Self::Settings(args) => args.execute(&mut ctx),
            Self::Services(args) => args.execute(&ctx),
            Self::Support(args) => args.execute(&ctx),
            Self::Checklists(args) => args.execute(&ctx),
            Self::Info(args) => args.execute(&ctx),
            Self::Speak(args) => args.execute(&ctx).await,
            Self::Data(args) => args.execute(&mut ctx),
            Self::Config(args) => args.execute(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute().await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
