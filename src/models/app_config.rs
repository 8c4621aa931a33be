use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body of `POST /app_state_change`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfigState {
    pub app_state: bool,
    pub app_config_trigger_value: String,
}

impl AppConfigState {
    /// Validate `raw` and build the request. The raw string is submitted
    /// untouched; only its trimmed form is checked.
    pub fn new(app_state: bool, raw: &str) -> Result<Self, AppError> {
        validate_trigger_value(raw)?;
        Ok(Self {
            app_state,
            app_config_trigger_value: raw.to_string(),
        })
    }
}

/// Check a trigger value against `^[-+]?[0-9]*\.?[0-9]+$` after trimming
/// whitespace and byte order marks.
pub fn validate_trigger_value(raw: &str) -> Result<(), AppError> {
    let value = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if value.is_empty() {
        return Err(AppError::EmptyValue);
    }
    if !is_signed_decimal(value) {
        return Err(AppError::InvalidNumber(value.to_string()));
    }
    Ok(())
}

fn is_signed_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => ("", unsigned),
    };
    int_part.bytes().all(|b| b.is_ascii_digit())
        && !frac_part.is_empty()
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}
