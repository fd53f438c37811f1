/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{client_for, setup_mock_server, working_draft};
use intern_tracker_adapter::{
    ClientConfig, InternTrackerClient, TimeoutPhase, TrackerError, WorkUpdateApi, DEFAULT_BASE_URL,
};
use rstest::rstest;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(InternTrackerClient::new());
    assert_eq!(client.base_url().as_str(), format!("{DEFAULT_BASE_URL}/"));
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
    };
    let client = assert_ok!(InternTrackerClient::with_config(config));
    assert_eq!(client.config().timeout, Duration::from_secs(5));
}

#[rstest]
#[case(500, true)]
#[case(503, true)]
#[case(429, true)]
#[case(400, false)]
#[case(404, false)]
#[tokio::test]
async fn test_error_status_retry_hint(#[case] status: u16, #[case] retryable: bool) {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/work-updates"))
        .respond_with(ResponseTemplate::new(status).set_body_string("failure"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_work_update(&working_draft())
        .await
        .expect_err("expected API error");

    assert_eq!(err.status(), Some(status));
    assert_eq!(err.is_retryable(), retryable);
    assert!(err.to_string().contains(&status.to_string()));
    assert!(err.to_string().contains("failure"));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/followups/start"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(serde_json::json!({ "sessionId": "s1", "questions": ["Q1"] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .start_followup("t1", "u1")
        .await
        .expect_err("expected timeout");

    assert!(matches!(
        err,
        TrackerError::Timeout {
            phase: TimeoutPhase::Request,
            duration: 2
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/followups/start"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .start_followup("t1", "u1")
        .await
        .expect_err("expected decode failure");

    assert!(matches!(err, TrackerError::Serialization(_)));
}

#[tokio::test]
async fn test_full_sequence_through_trait() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/work-updates"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "tempWorkUpdateId": "t1" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/followups/start"))
        .and(query_param("temp_work_update_id", "t1"))
        .and(query_param("user_id", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sessionId": "s1",
            "questions": ["Q1", "Q2"],
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/followup/s1/complete"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "workUpdateId": "w1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let api: &dyn WorkUpdateApi = &client;

    let created = assert_ok!(api.create_work_update(&working_draft()).await);
    let temp_id = created.temp_work_update_id.expect("temp id");
    let session = assert_ok!(api.start_followup(&temp_id, "u1").await);
    let answers = vec!["A1".to_string(), "A2".to_string()];
    let done = assert_ok!(api.complete_followup(&session.session_id, &answers).await);

    assert_eq!(done.work_update_id.as_deref(), Some("w1"));
}
