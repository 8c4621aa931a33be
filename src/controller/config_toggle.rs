use serde::Serialize;
use tracing::{info, warn};

use crate::api::client::PanelClient;
use crate::api::response::SubmitReply;
use crate::error::AppError;
use crate::models::app_config::AppConfigState;

/// The application on/off checkbox, its trigger value field and the
/// details container shown while the application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigForm {
    pub checked: bool,
    pub trigger_value: String,
    pub read_only: bool,
    pub details_visible: bool,
}

impl ConfigForm {
    pub fn new(checked: bool, trigger_value: impl Into<String>) -> Self {
        let mut form = Self {
            checked,
            trigger_value: trigger_value.into(),
            read_only: false,
            details_visible: false,
        };
        form.initialize();
        form
    }

    /// Lock the field and show the details while checked; unlock and hide
    /// them otherwise.
    pub fn initialize(&mut self) {
        self.read_only = self.checked;
        self.details_visible = self.checked;
    }

    /// Apply a user click on the checkbox and submit the result.
    pub async fn toggle(&mut self, client: &PanelClient) -> Result<SubmitReply, AppError> {
        self.checked = !self.checked;
        self.app_set_state(client).await
    }

    /// Validate the trigger value and submit the current checkbox state.
    ///
    /// `checked` must already hold the user's new choice. A validation
    /// failure unchecks the box and sends nothing. A failed submission
    /// restores the box to its state before the toggle.
    pub async fn app_set_state(&mut self, client: &PanelClient) -> Result<SubmitReply, AppError> {
        let state = match AppConfigState::new(self.checked, &self.trigger_value) {
            Ok(state) => state,
            Err(e) => {
                self.checked = false;
                self.initialize();
                return Err(e);
            }
        };

        info!(
            app_state = state.app_state,
            trigger = %state.app_config_trigger_value,
            "submitting application state"
        );

        match client.change_app_state(&state).await {
            Ok(reply) => {
                self.initialize();
                Ok(reply)
            }
            Err(e) => {
                warn!(error = %e, "application state change failed, restoring checkbox");
                self.checked = !state.app_state;
                self.initialize();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_checked() {
        let form = ConfigForm::new(true, "2.5");
        assert!(form.read_only);
        assert!(form.details_visible);
    }

    #[test]
    fn test_initialize_unchecked() {
        let form = ConfigForm::new(false, "");
        assert!(!form.read_only);
        assert!(!form.details_visible);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        for checked in [true, false] {
            let mut form = ConfigForm::new(checked, "1.0");
            let first = form.clone();
            form.initialize();
            form.initialize();
            assert_eq!(form, first);
        }
    }
}
