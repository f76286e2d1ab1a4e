use std::path::PathBuf;

use clap::Parser;

/// tinyhud: replay host events through the quick-equip HUD engine.
#[derive(Parser, Debug)]
#[command(name = "tinyhud", version, about)]
pub struct Args {
    /// Settings file. Defaults to the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON script with the initial host state and the events to replay.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log filter directive, e.g. `tinyhud=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Keep running and rebuild the layout whenever the settings file changes.
    #[arg(long)]
    pub watch: bool,

    /// Print the effective settings as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
