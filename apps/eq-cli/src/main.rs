//! # eq-cli
//!
//! Command-line interface for Eternal Quest.
//!
//! - `eq play` — interactive menu to create goals, record events, and show the score
//! - `eq events tail` — inspect recent engine events from the JSONL log
//! - `eq config show` — print the resolved `.quest/` configuration

mod commands;
mod console;
mod prompt;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use eq_goal::QuestConfig;
use tracing_subscriber::EnvFilter;

/// Eternal Quest — track goals and earn points.
#[derive(Parser)]
#[command(name = "eq", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Log engine activity to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Defaults to `play` when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive goal menu.
    Play,
    /// Inspect the event log.
    Events {
        #[command(subcommand)]
        command: commands::events::EventsCommands,
    },
    /// Inspect the quest configuration.
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let config = QuestConfig::load(&project_root)
        .with_context(|| format!("loading quest config for {}", project_root.display()))?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::execute(&config),
        Commands::Events { command } => commands::events::execute(&command, &config),
        Commands::Config { command } => commands::config::execute(&command, &config),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "info" } else { "warn" };
    // Logs go to stderr so they don't interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("eq_goal={}", level).parse()?)
                .add_directive(format!("eq_cli={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}
