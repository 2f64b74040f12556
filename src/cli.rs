use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wstatus_agent::humanize::Interval;

#[derive(Parser, Debug)]
#[command(name = "wstatus-agent")]
#[command(about = "wstatus uptime agent", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the agent loop
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Path to the TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Agent API token (overrides the WSTATUS_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Coordinator base endpoint, trailing slash included
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Delay between work-fetch cycles (e.g. "30s", "5m")
    #[arg(long)]
    pub poll_interval: Option<Interval>,
}
