use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::controller::switch_grid::RollbackPolicy;
use crate::controller::theme::Theme;
use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

/// Contents of `config.toml`. Every field is optional; missing ones fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub rollback_on_failure: Option<bool>,
    pub theme: Option<Theme>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the file if it exists, otherwise return an empty config.
    pub fn load_optional(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn example() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            rollback_on_failure: Some(true),
            theme: Some(Theme::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("panelctl").join("config.toml"))
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
    pub base_url: String,
    pub timeout: Duration,
    pub rollback: RollbackPolicy,
    pub theme: Theme,
    pub config_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Layer the file config under command-line overrides.
    pub fn resolve(
        file: FileConfig,
        base_url: Option<String>,
        output_mode: OutputMode,
        verbose: bool,
        config_path: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let base_url = base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let rollback = match file.rollback_on_failure {
            Some(false) => RollbackPolicy::KeepOptimistic,
            _ => RollbackPolicy::Rollback,
        };

        Ok(Self {
            output_mode,
            verbose,
            base_url,
            timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            rollback,
            theme: file.theme.unwrap_or_default(),
            config_path,
        })
    }
}

fn normalize_base_url(url: &str) -> Result<String, AppError> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "base URL must start with http:// or https://, got '{}'",
            url
        )));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_url_overrides_file() {
        let file = FileConfig {
            base_url: Some("http://panel.local:5001".into()),
            ..Default::default()
        };
        let config = RuntimeConfig::resolve(
            file,
            Some("http://10.0.0.2:5000/".into()),
            OutputMode::Json,
            false,
            None,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn test_defaults() {
        let config =
            RuntimeConfig::resolve(FileConfig::default(), None, OutputMode::Table, true, None)
                .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.rollback, RollbackPolicy::Rollback);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_rollback_can_be_disabled() {
        let file: FileConfig = toml::from_str("rollback_on_failure = false").unwrap();
        let config =
            RuntimeConfig::resolve(file, None, OutputMode::Json, false, None).unwrap();
        assert_eq!(config.rollback, RollbackPolicy::KeepOptimistic);
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let result = RuntimeConfig::resolve(
            FileConfig::default(),
            Some("panel.local".into()),
            OutputMode::Json,
            false,
            None,
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_example_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        FileConfig::example().save(&path).unwrap();
        let loaded = FileConfig::from_file(&path).unwrap();
        assert_eq!(loaded, FileConfig::example());
    }
}
