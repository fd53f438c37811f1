/*
[INPUT]:  None
[OUTPUT]: Backend health (database connectivity, cleanup status)
[POS]:    HTTP layer - service status endpoint (no auth required)
[UPDATE]: When the health payload changes
*/

use crate::http::{InternTrackerClient, Result};
use crate::types::HealthStatus;
use reqwest::Method;

impl InternTrackerClient {
    /// Query backend health
    ///
    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus> {
        let builder = self.request(Method::GET, &["health"])?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, InternTrackerClient};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "healthy",
                "database": "connected",
                "ttl_index": "active",
                "automatic_cleanup": "enabled",
                "cleanup_task_running": true,
                "timestamp": "2024-05-02T09:15:30.000001",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            InternTrackerClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        let status = client.health().await.expect("health failed");

        assert!(status.is_healthy());
        assert_eq!(status.database.as_deref(), Some("connected"));
        assert_eq!(status.cleanup_task_running, Some(true));
    }
}
