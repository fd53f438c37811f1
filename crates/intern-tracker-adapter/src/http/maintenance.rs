/*
[INPUT]:  None
[OUTPUT]: Database statistics, TTL cleanup status, manual cleanup reports
[POS]:    HTTP layer - maintenance endpoints of the temporary-update TTL system
[UPDATE]: When the cleanup or statistics payloads change
*/

use crate::http::{InternTrackerClient, Result};
use crate::types::{CleanupReport, CleanupStatus, DatabaseStats};
use reqwest::Method;

impl InternTrackerClient {
    /// Collection counts; `None` when the backend could not compute them
    ///
    /// GET /stats
    pub async fn stats(&self) -> Result<Option<DatabaseStats>> {
        let builder = self.request(Method::GET, &["stats"])?;
        self.send_json(builder).await
    }

    /// GET /api/cleanup/status
    pub async fn cleanup_status(&self) -> Result<CleanupStatus> {
        let builder = self.request(Method::GET, &["api", "cleanup", "status"])?;
        self.send_json(builder).await
    }

    /// Delete temporary work updates (and their sessions) older than 24 hours
    ///
    /// DELETE /api/temp-work-updates/cleanup
    pub async fn cleanup_temp_updates(&self) -> Result<CleanupReport> {
        let builder = self.request(Method::DELETE, &["api", "temp-work-updates", "cleanup"])?;
        self.send_json(builder).await
    }
}
