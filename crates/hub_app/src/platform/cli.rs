use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "game-hub")]
#[command(about = "Browse the game hub catalogs from the terminal")]
pub struct Cli {
    /// RON config file; `./hub.ron` is used when present and this is omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log destination, overriding the config file.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    /// Hub shown at startup: discovery, profile or world.
    #[arg(long)]
    pub hub: Option<String>,
}
