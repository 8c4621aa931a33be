use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panelctl::api::client::PanelClient;
use panelctl::controller::config_toggle::ConfigForm;
use panelctl::error::AppError;

fn client(server: &MockServer) -> PanelClient {
    PanelClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

async fn expect_no_submission(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/app_state_change"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_valid_values_submit_raw_string() {
    for raw in ["2.5", "-3", ".5", "+10.0", " 4.25 "] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/app_state_change"))
            .and(header("content-type", "application/json;charset=UTF-8"))
            .and(body_json(
                json!({"app_state": true, "app_config_trigger_value": raw}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
            .expect(1)
            .mount(&server)
            .await;

        let mut form = ConfigForm::new(false, raw);
        let reply = form.toggle(&client(&server)).await.unwrap();

        assert!(reply.accepted);
        assert!(form.checked);
        assert!(form.read_only);
        assert!(form.details_visible);
    }
}

#[tokio::test]
async fn test_empty_value_unchecks_without_submitting() {
    let server = MockServer::start().await;
    expect_no_submission(&server).await;

    let mut form = ConfigForm::new(false, "   ");
    let result = form.toggle(&client(&server)).await;

    assert!(matches!(result, Err(AppError::EmptyValue)));
    assert!(!form.checked);
    assert!(!form.read_only);
}

#[tokio::test]
async fn test_invalid_values_uncheck_without_submitting() {
    for raw in ["abc", "2.5.3", "-"] {
        let server = MockServer::start().await;
        expect_no_submission(&server).await;

        let mut form = ConfigForm::new(false, raw);
        let result = form.toggle(&client(&server)).await;

        assert!(
            matches!(result, Err(AppError::InvalidNumber(_))),
            "'{}' should be rejected",
            raw
        );
        assert!(!form.checked);
    }
}

#[tokio::test]
async fn test_turning_off_unlocks_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app_state_change"))
        .and(body_json(
            json!({"app_state": false, "app_config_trigger_value": "1.5"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("Success"))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = ConfigForm::new(true, "1.5");
    assert!(form.read_only);
    form.toggle(&client(&server)).await.unwrap();

    assert!(!form.checked);
    assert!(!form.read_only);
    assert!(!form.details_visible);
}

#[tokio::test]
async fn test_rejection_restores_checkbox() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app_state_change"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Error, application is already running"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = ConfigForm::new(false, "2.5");
    let result = form.toggle(&client(&server)).await;

    assert!(matches!(result, Err(AppError::Rejected { .. })));
    assert!(!form.checked);
    assert!(!form.read_only);
    assert!(!form.details_visible);
}

#[tokio::test]
async fn test_server_error_restores_checkbox() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app_state_change"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = ConfigForm::new(true, "3");
    let result = form.toggle(&client(&server)).await;

    assert!(matches!(result, Err(AppError::Api { status: Some(503), .. })));
    assert!(form.checked);
    assert!(form.read_only);
}
