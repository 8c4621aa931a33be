pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;

use cli::output::print_error;
use config::{default_config_path, FileConfig, OutputMode, RuntimeConfig};
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let result = match build_config(&cli_args) {
        Ok(config) => {
            logging::init(config.verbose);
            dispatch(cli_args.command, &config).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

fn build_config(cli_args: &cli::Cli) -> Result<RuntimeConfig, AppError> {
    let config_path = cli_args.config.clone().or_else(default_config_path);
    let file = match &config_path {
        Some(path) => FileConfig::load_optional(path)?,
        None => FileConfig::default(),
    };

    RuntimeConfig::resolve(
        file,
        cli_args.url.clone(),
        if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
        cli_args.verbose,
        config_path,
    )
}

async fn dispatch(command: cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    match command {
        cli::Commands::Switches(cmd) => cli::switches::handle(&cmd, config).await,
        cli::Commands::App(cmd) => cli::app::handle(&cmd, config).await,
        cli::Commands::Config(cmd) => cli::config::handle(&cmd, config).await,
    }
}
