//! CLI command handlers for DS Pathway.
//!
//! Each subcommand loads what it needs through [`context::Context`], prints
//! in the user's chosen register and returns a [`common::CliResult`] whose
//! error carries the process exit code.

pub mod checklists;
pub mod common;
pub mod config;
pub mod context;
pub mod data;
pub mod directory;
pub mod info;
pub mod page;
pub mod role;
pub mod settings;
pub mod speak;

// Re-export types used by main.rs and tests
pub use checklists::ChecklistsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use context::Context;
pub use data::DataArgs;
pub use directory::{ServicesArgs, SupportArgs};
pub use info::InfoArgs;
pub use page::PageArgs;
pub use role::RoleArgs;
pub use settings::SettingsArgs;
pub use speak::SpeakArgs;
