use std::path::PathBuf;

use clap::Parser;

/// Tabdock: replay pointer gestures and dock operations against a
/// headless tab layout and print the resulting tree.
#[derive(Parser, Debug)]
#[command(name = "tabdock", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial layout (TOML). A built-in layout is used when omitted.
    #[arg(short = 'l', long)]
    pub layout: Option<PathBuf>,

    /// Script of steps to replay (TOML).
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: i32,

    /// Container height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: i32,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Print the final layout as JSON instead of an outline.
    #[arg(long)]
    pub snapshot: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
