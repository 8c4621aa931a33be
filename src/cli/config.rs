use clap::Subcommand;
use serde_json::json;

use crate::cli::output::print_json;
use crate::config::{default_config_path, FileConfig, RuntimeConfig};
use crate::controller::switch_grid::RollbackPolicy;
use crate::error::AppError;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle(cmd: &ConfigCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        ConfigCommand::Show => {
            print_json(&json!({
                "config_path": config.config_path,
                "base_url": config.base_url,
                "timeout_secs": config.timeout.as_secs(),
                "rollback_on_failure": config.rollback == RollbackPolicy::Rollback,
                "theme": config.theme,
            }));
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = config
                .config_path
                .clone()
                .or_else(default_config_path)
                .ok_or_else(|| AppError::Config("no config directory available".into()))?;
            if path.exists() && !force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            FileConfig::example().save(&path)?;
            print_json(&json!({"created": path}));
            Ok(())
        }
    }
}
