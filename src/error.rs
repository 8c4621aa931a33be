use crate::models::switch::SwitchName;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please select a value for active power")]
    EmptyValue,

    #[error("Please select a valid value for active power (ex: 2.5), got '{0}'")]
    InvalidNumber(String),

    #[error("Unknown state for switch '{0}'")]
    UnknownState(SwitchName),

    #[error("Unknown switch '{0}' (expected one of: hol, baie1, baie2, living, bucatarie)")]
    UnknownSwitch(String),

    #[error("Request rejected by panel: {message}")]
    Rejected { message: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::EmptyValue | AppError::InvalidNumber(_) => 2,
            AppError::UnknownState(_) | AppError::UnknownSwitch(_) => 3,
            AppError::Rejected { .. } => 4,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::EmptyValue => "empty_value",
            AppError::InvalidNumber(_) => "invalid_number",
            AppError::UnknownState(_) => "unknown_state",
            AppError::UnknownSwitch(_) => "unknown_switch",
            AppError::Rejected { .. } => "rejected",
            AppError::Api { .. } => "api",
            AppError::Config(_) => "config",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
            AppError::TomlDe(_) | AppError::TomlSer(_) => "toml",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let AppError::Api {
            status: Some(status),
            ..
        } = self
        {
            obj["status"] = serde_json::json!(status);
        }
        obj
    }
}
