use std::io::IsTerminal;

use clap::{Subcommand, ValueEnum};
use dialoguer::Input;
use serde_json::json;

use crate::api::client::PanelClient;
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::controller::config_toggle::ConfigForm;
use crate::error::AppError;

#[derive(Subcommand)]
pub enum AppCommand {
    /// Turn the application on or off
    Set {
        /// Application state
        #[arg(value_enum)]
        state: AppPower,
        /// Active power trigger value in kW (ex: 2.5)
        #[arg(allow_hyphen_values = true)]
        trigger: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AppPower {
    On,
    Off,
}

pub async fn handle(cmd: &AppCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        AppCommand::Set { state, trigger } => {
            let trigger = match trigger {
                Some(value) => value.clone(),
                None => prompt_trigger()?,
            };
            let on = matches!(state, AppPower::On);

            // The checkbox starts in the opposite state and the user clicks it.
            let mut form = ConfigForm::new(!on, trigger);
            let client = PanelClient::new(&config.base_url, config.timeout)?;
            let reply = form.toggle(&client).await?;

            print_json(&json!({
                "app_state": form.checked,
                "app_config_trigger_value": form.trigger_value,
                "read_only": form.read_only,
                "reply": reply.message,
            }));
            Ok(())
        }
    }
}

/// Ask for the trigger value on a terminal; elsewhere treat it as empty.
fn prompt_trigger() -> Result<String, AppError> {
    if !std::io::stdin().is_terminal() {
        return Ok(String::new());
    }
    Input::<String>::new()
        .with_prompt("Active power trigger (kW)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::InvalidInput(e.to_string()))
}
