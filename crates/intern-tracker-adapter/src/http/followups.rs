/*
[INPUT]:  Temporary work update ids, session ids and collected answers
[OUTPUT]: Follow-up sessions (questions, completion, history)
[POS]:    HTTP layer - follow-up session endpoints
[UPDATE]: When adding follow-up endpoints or changing query parameters
*/

use crate::http::{InternTrackerClient, Result};
use crate::types::{
    CompleteFollowupRequest, CompleteFollowupResponse, FollowupSessionRecord, SessionList,
    SessionListQuery, StartFollowupQuery, StartFollowupResponse,
};
use reqwest::Method;
use tracing::info;

impl InternTrackerClient {
    /// Start a follow-up session for a temporary work update
    ///
    /// POST /api/followups/start?temp_work_update_id={id}&user_id={id}
    pub async fn start_followup(
        &self,
        temp_work_update_id: &str,
        user_id: &str,
    ) -> Result<StartFollowupResponse> {
        let query = StartFollowupQuery {
            temp_work_update_id: temp_work_update_id.to_string(),
            user_id: user_id.to_string(),
        };
        let builder = self
            .request(Method::POST, &["api", "followups", "start"])?
            .query(&query);
        let response: StartFollowupResponse = self.send_json(builder).await?;

        info!(
            session_id = %response.session_id,
            question_count = response.questions.len(),
            "follow-up session started"
        );
        Ok(response)
    }

    /// Complete a follow-up session with index-aligned answers
    ///
    /// PUT /api/followup/{session_id}/complete
    pub async fn complete_followup(
        &self,
        session_id: &str,
        answers: &[String],
    ) -> Result<CompleteFollowupResponse> {
        let body = CompleteFollowupRequest {
            answers: answers.to_vec(),
        };
        let builder = self
            .request(Method::PUT, &["api", "followup", session_id, "complete"])?
            .json(&body);
        let response: CompleteFollowupResponse = self.send_json(builder).await?;

        info!(
            session_id,
            work_update_id = response.work_update_id.as_deref().unwrap_or("-"),
            "follow-up session completed"
        );
        Ok(response)
    }

    /// Fetch a single follow-up session
    ///
    /// GET /api/followup/session/{session_id}
    pub async fn get_followup_session(&self, session_id: &str) -> Result<FollowupSessionRecord> {
        let builder = self.request(Method::GET, &["api", "followup", "session", session_id])?;
        self.send_json(builder).await
    }

    /// List follow-up sessions of a user, newest first
    ///
    /// GET /api/followup-sessions/{user_id}?limit={limit}&skip={skip}
    pub async fn list_followup_sessions(
        &self,
        user_id: &str,
        query: &SessionListQuery,
    ) -> Result<SessionList> {
        let builder = self
            .request(Method::GET, &["api", "followup-sessions", user_id])?
            .query(query);
        self.send_json(builder).await
    }
}
