//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// foodboard - manage a restaurant menu from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the backend serving /foods
    #[arg(long, env = "FOODBOARD_API_URL")]
    pub api_url: Option<String>,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// UI tick interval in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_rate: Option<u64>,

    /// Log filter, e.g. "debug" or "foodboard=trace"
    #[arg(long)]
    pub log_level: Option<String>,
}
