/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::FollowupSessionRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkUpdateResponse {
    pub message: Option<String>,
    /// Present when the update is held pending a follow-up session
    #[serde(rename = "tempWorkUpdateId")]
    pub temp_work_update_id: Option<String>,
    /// Present when the update was stored permanently (leave)
    #[serde(rename = "workUpdateId")]
    pub work_update_id: Option<String>,
    #[serde(rename = "isOverride")]
    pub is_override: Option<bool>,
    #[serde(rename = "redirectToFollowup")]
    pub redirect_to_followup: Option<bool>,
    #[serde(rename = "isOnLeave")]
    pub is_on_leave: Option<bool>,
    pub ttl_expiry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartFollowupResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub questions: Vec<String>,
    pub message: Option<String>,
    pub reminder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompleteFollowupResponse {
    pub message: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    #[serde(rename = "workUpdateId")]
    pub work_update_id: Option<String>,
    #[serde(rename = "workUpdateCompleted")]
    pub work_update_completed: Option<bool>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionList {
    pub sessions: Vec<FollowupSessionRecord>,
    #[serde(default)]
    pub count: usize,
}

/// Response of `DELETE /api/temp-work-updates/cleanup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    pub message: Option<String>,
    #[serde(default)]
    pub deleted_temp_updates: u64,
    #[serde(default)]
    pub deleted_sessions: u64,
    pub ttl_status: Option<String>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_for_working_status() {
        let body = r#"{
            "message": "Work update saved temporarily. Complete follow-up within 24 hours to finalize.",
            "tempWorkUpdateId": "t1",
            "redirectToFollowup": true,
            "isOnLeave": false,
            "ttl_expiry": "24 hours from now"
        }"#;

        let response: CreateWorkUpdateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.temp_work_update_id.as_deref(), Some("t1"));
        assert_eq!(response.redirect_to_followup, Some(true));
        assert!(response.work_update_id.is_none());
    }

    #[test]
    fn test_create_response_tolerates_missing_fields() {
        let response: CreateWorkUpdateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, CreateWorkUpdateResponse::default());
    }

    #[test]
    fn test_start_response_requires_session_id() {
        let result = serde_json::from_str::<StartFollowupResponse>(r#"{"questions": ["Q1"]}"#);
        assert!(result.is_err());
    }
}
