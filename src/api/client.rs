use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::response::SubmitReply;
use crate::error::AppError;
use crate::models::app_config::AppConfigState;
use crate::models::switch::{PanelSnapshot, SetButtonRequest, SwitchAction, SwitchName};

const PATH_APP_STATE_CHANGE: &str = "/app_state_change";
const PATH_SET_BUTTON: &str = "/set_button";
const PATH_GET_BUTTON: &str = "/get_button";

const USER_AGENT: &str = concat!("panelctl/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the control panel backend.
pub struct PanelClient {
    client: reqwest::Client,
    base_url: String,
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

impl PanelClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body and interpret the backend's plain-text reply.
    async fn request_post<T: Serialize>(
        &self,
        url_path: &str,
        body: &T,
    ) -> Result<SubmitReply, AppError> {
        let url = format!("{}{}", self.base_url, url_path);
        let body_json = serde_json::to_string(body)?;

        debug!(%url, body = %body_json, "POST");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json;charset=UTF-8")
            .body(body_json)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        debug!(%status, reply = %text, "response");

        if !status.is_success() {
            return Err(AppError::Api {
                message: format!("{}: {}", status, text),
                status: Some(status.as_u16()),
            });
        }

        SubmitReply::parse(&text).into_result()
    }

    /// Push the application on/off flag together with its trigger value.
    pub async fn change_app_state(&self, state: &AppConfigState) -> Result<SubmitReply, AppError> {
        self.request_post(PATH_APP_STATE_CHANGE, state).await
    }

    /// Push a single switch update.
    pub async fn set_button(
        &self,
        name: SwitchName,
        action: SwitchAction,
    ) -> Result<SubmitReply, AppError> {
        let request = SetButtonRequest {
            name,
            state: action,
        };
        self.request_post(PATH_SET_BUTTON, &request).await
    }

    /// Read the state of every switch.
    pub async fn get_buttons(&self) -> Result<PanelSnapshot, AppError> {
        let url = format!("{}{}", self.base_url, PATH_GET_BUTTON);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                message: format!("{}: {}", status, body),
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        debug!(%body, "response");
        Ok(serde_json::from_str(&body)?)
    }
}
