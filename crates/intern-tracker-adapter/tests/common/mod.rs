/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for intern-tracker-adapter tests

use intern_tracker_adapter::{ClientConfig, InternTrackerClient, WorkStatus, WorkUpdateDraft};
use std::time::Duration;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with short timeouts
pub fn client_for(server: &MockServer) -> InternTrackerClient {
    let config = ClientConfig {
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
    };
    InternTrackerClient::with_config_and_base_url(config, &server.uri()).expect("client init")
}

/// Draft as produced by the form for a working day
pub fn working_draft() -> WorkUpdateDraft {
    WorkUpdateDraft {
        user_id: "u1".to_string(),
        work_status: WorkStatus::Working,
        description: "Did X".to_string(),
        challenges: String::new(),
        plans: String::new(),
    }
}
