use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// One of the fixed set of light switches wired to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchName {
    Hol,
    Baie1,
    Baie2,
    Living,
    Bucatarie,
}

impl SwitchName {
    pub const ALL: [SwitchName; 5] = [
        SwitchName::Hol,
        SwitchName::Baie1,
        SwitchName::Baie2,
        SwitchName::Living,
        SwitchName::Bucatarie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchName::Hol => "hol",
            SwitchName::Baie1 => "baie1",
            SwitchName::Baie2 => "baie2",
            SwitchName::Living => "living",
            SwitchName::Bucatarie => "bucatarie",
        }
    }
}

impl fmt::Display for SwitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwitchName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| AppError::UnknownSwitch(s.to_string()))
    }
}

/// Requested switch state as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SwitchAction {
    On,
    Off,
}

impl SwitchAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchAction::On => "on",
            SwitchAction::Off => "off",
        }
    }
}

impl From<bool> for SwitchAction {
    fn from(on: bool) -> Self {
        if on {
            SwitchAction::On
        } else {
            SwitchAction::Off
        }
    }
}

impl fmt::Display for SwitchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /set_button`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetButtonRequest {
    pub name: SwitchName,
    pub state: SwitchAction,
}

/// On/off state of every switch. All five keys are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwitchStates {
    pub hol: bool,
    pub baie1: bool,
    pub baie2: bool,
    pub living: bool,
    pub bucatarie: bool,
}

impl SwitchStates {
    pub fn get(&self, name: SwitchName) -> bool {
        match name {
            SwitchName::Hol => self.hol,
            SwitchName::Baie1 => self.baie1,
            SwitchName::Baie2 => self.baie2,
            SwitchName::Living => self.living,
            SwitchName::Bucatarie => self.bucatarie,
        }
    }

    pub fn set(&mut self, name: SwitchName, on: bool) {
        match name {
            SwitchName::Hol => self.hol = on,
            SwitchName::Baie1 => self.baie1 = on,
            SwitchName::Baie2 => self.baie2 = on,
            SwitchName::Living => self.living = on,
            SwitchName::Bucatarie => self.bucatarie = on,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SwitchName, bool)> + '_ {
        SwitchName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

/// Response of `GET /get_button`: switch states plus thermostat readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    #[serde(flatten)]
    pub switches: SwitchStates,
    #[serde(default, deserialize_with = "thermostat_reading")]
    pub set_temp: Option<f64>,
    #[serde(default, deserialize_with = "thermostat_reading")]
    pub room_temp: Option<f64>,
    #[serde(skip_deserializing, default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

/// The thermostat reports `-1` when it has no reading.
const NO_READING: f64 = -1.0;

fn thermostat_reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|t| *t != NO_READING))
}
