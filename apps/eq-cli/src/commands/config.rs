// config.rs — Config subcommands: show.

use anyhow::Context;
use clap::Subcommand;
use eq_goal::QuestConfig;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration as TOML.
    Show,
}

pub fn execute(cmd: &ConfigCommands, config: &QuestConfig) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("{}", render(config)?);
            if !config.settings_file.exists() {
                println!("# {} not found; using defaults", config.settings_file.display());
            }
        }
    }
    Ok(())
}

fn render(config: &QuestConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("rendering quest config")
}
