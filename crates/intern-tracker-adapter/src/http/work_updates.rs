/*
[INPUT]:  Work update draft built by the submission form
[OUTPUT]: Creation result (temporary id for follow-up, or permanent id for leave)
[POS]:    HTTP layer - work update endpoints
[UPDATE]: When the create payload or response format changes
*/

use crate::http::{InternTrackerClient, Result};
use crate::types::{CreateWorkUpdateResponse, WorkUpdateDraft};
use reqwest::Method;
use tracing::info;

impl InternTrackerClient {
    /// Create a work update
    ///
    /// POST /api/work-updates
    pub async fn create_work_update(
        &self,
        draft: &WorkUpdateDraft,
    ) -> Result<CreateWorkUpdateResponse> {
        let builder = self
            .request(Method::POST, &["api", "work-updates"])?
            .json(draft);
        let response: CreateWorkUpdateResponse = self.send_json(builder).await?;

        info!(
            user_id = %draft.user_id,
            work_status = %draft.work_status,
            temp_work_update_id = response.temp_work_update_id.as_deref().unwrap_or("-"),
            "work update created"
        );
        Ok(response)
    }
}
