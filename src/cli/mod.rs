pub mod app;
pub mod config;
pub mod output;
pub mod switches;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "panelctl",
    version,
    about = "Home control panel CLI - toggle lights and the solar trigger application"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the control panel backend
    #[arg(long, env = "PANELCTL_URL", global = true)]
    pub url: Option<String>,

    /// Path to the config file
    #[arg(long, env = "PANELCTL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (show HTTP requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Light switches
    #[command(subcommand)]
    Switches(switches::SwitchesCommand),

    /// Solar trigger application
    #[command(subcommand)]
    App(app::AppCommand),

    /// Local configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}
