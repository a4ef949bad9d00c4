use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "harbor")]
#[command(about = "Headless tugboat towing session", long_about = None)]
pub struct Args {
    /// Path to a TOML config; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Run this many ticks instead of the configured duration
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Log telemetry every N ticks (0 disables)
    #[arg(long)]
    pub log_every: Option<u64>,
}
