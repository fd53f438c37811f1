/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::WorkStatus;

/// Payload of `POST /api/work-updates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUpdateDraft {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub work_status: WorkStatus,
    pub description: String,
    pub challenges: String,
    pub plans: String,
}

/// Query string of `POST /api/followups/start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartFollowupQuery {
    pub temp_work_update_id: String,
    pub user_id: String,
}

/// Payload of `PUT /api/followup/{session_id}/complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteFollowupRequest {
    pub answers: Vec<String>,
}

/// Paging for `GET /api/followup-sessions/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}
