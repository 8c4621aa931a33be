use clap::Subcommand;
use serde_json::json;
use tabled::Tabled;

use crate::api::client::PanelClient;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::controller::switch_grid::SwitchGrid;
use crate::error::AppError;
use crate::models::switch::{SwitchAction, SwitchName};

#[derive(Subcommand)]
pub enum SwitchesCommand {
    /// Show the state of every switch
    List,

    /// Flip one switch
    Toggle {
        /// Switch name (hol, baie1, baie2, living, bucatarie)
        name: String,
    },

    /// Turn one switch on or off
    Set {
        /// Switch name (hol, baie1, baie2, living, bucatarie)
        name: String,
        /// Desired state
        #[arg(value_enum)]
        state: SwitchAction,
    },
}

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "COLOR")]
    color: String,
}

pub async fn handle(cmd: &SwitchesCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    let client = PanelClient::new(&config.base_url, config.timeout)?;
    let mut grid = SwitchGrid::new(config.theme.clone(), config.rollback);

    match cmd {
        SwitchesCommand::List => {
            grid.sync(&client).await?;
            print_grid(&grid, config);
            Ok(())
        }
        SwitchesCommand::Toggle { name } => {
            let name: SwitchName = name.parse()?;
            // A failed fetch leaves the switch unknown, which toggle reports.
            grid.initialize(&client).await;
            let action = grid.toggle(&client, name).await?;
            print_json(&json!({"switch": name, "state": action}));
            Ok(())
        }
        SwitchesCommand::Set { name, state } => {
            let name: SwitchName = name.parse()?;
            grid.set(&client, name, *state).await?;
            print_json(&json!({"switch": name, "state": state}));
            Ok(())
        }
    }
}

fn print_grid(grid: &SwitchGrid, config: &RuntimeConfig) {
    if config.output_mode == OutputMode::Table {
        let rows: Vec<SwitchRow> = grid
            .controls()
            .iter()
            .map(|control| SwitchRow {
                name: control.name.to_string(),
                state: control.phase.as_str().to_string(),
                color: grid.appearance(control.name).unwrap_or("-").to_string(),
            })
            .collect();
        print_table(&rows);
        return;
    }

    let switches: serde_json::Map<String, serde_json::Value> = grid
        .controls()
        .iter()
        .map(|control| (control.name.to_string(), json!(control.phase)))
        .collect();
    let mut result = json!({ "switches": switches });
    if let Some(snapshot) = grid.snapshot() {
        result["thermostat"] = json!({
            "set_temp": snapshot.set_temp,
            "room_temp": snapshot.room_temp,
        });
        result["fetched_at"] = json!(snapshot.fetched_at.to_rfc3339());
    }
    print_json(&result);
}
