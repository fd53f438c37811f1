/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Server-side records returned by read endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::SessionStatus;

/// Follow-up session as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowupSessionRecord {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "tempWorkUpdateId", default)]
    pub temp_work_update_id: Option<String>,
    #[serde(rename = "workUpdateId", default)]
    pub work_update_id: Option<String>,
    #[serde(default)]
    pub session_date: Option<String>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub answers: Vec<String>,
    pub status: SessionStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<NaiveDateTime>,
}

impl FollowupSessionRecord {
    /// Number of questions with a non-blank answer
    pub fn answered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|answer| !answer.trim().is_empty())
            .count()
    }
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: Option<String>,
    pub ttl_index: Option<String>,
    pub automatic_cleanup: Option<String>,
    pub cleanup_task_running: Option<bool>,
    pub error: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Work update counts in `GET /stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUpdateCounts {
    pub total: u64,
    #[serde(default)]
    pub completed_followups: u64,
    #[serde(default)]
    pub incomplete_followups: u64,
}

/// Temporary (awaiting follow-up) work update counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempWorkUpdateCounts {
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub completed: u64,
}

/// Cleanup summary attached to `GET /stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupSystem {
    pub ttl_index_active: bool,
    #[serde(default)]
    pub manual_task_running: Option<bool>,
    pub cleanup_frequency: Option<String>,
    pub automatic_deletion: Option<String>,
}

/// Response of `GET /stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStats {
    pub work_updates: WorkUpdateCounts,
    pub temp_work_updates: TempWorkUpdateCounts,
    pub followup_sessions: SessionCounts,
    #[serde(default)]
    pub cleanup_system: Option<CleanupSystem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlIndexStatus {
    pub active: bool,
    pub expiry_time: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualCleanupStatus {
    /// `null` until the backend has started its cleanup task
    #[serde(default)]
    pub task_running: Option<bool>,
    pub frequency: Option<String>,
    pub purpose: Option<String>,
    pub age_threshold: Option<String>,
}

/// Response of `GET /api/cleanup/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupStatus {
    pub ttl_index: TtlIndexStatus,
    pub manual_cleanup: ManualCleanupStatus,
    pub recommendation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_record_from_backend_document() {
        let body = r#"{
            "sessionId": "u1_session_2024-05-02",
            "userId": "u1",
            "tempWorkUpdateId": "t1",
            "session_date": "2024-05-02",
            "questions": ["Q1", "Q2", "Q3"],
            "answers": ["A1", "", "  "],
            "status": "pending",
            "createdAt": "2024-05-02T09:15:30.123456",
            "completedAt": null
        }"#;

        let record: FollowupSessionRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.status, SessionStatus::Pending);
        assert_eq!(record.answered_count(), 1);
        assert!(record.created_at.is_some());
        assert!(record.completed_at.is_none());
    }

    #[test]
    fn test_unhealthy_status() {
        let status: HealthStatus = serde_json::from_str(
            r#"{"status": "unhealthy", "error": "ping failed", "cleanup_task_running": false}"#,
        )
        .unwrap();
        assert!(!status.is_healthy());
        assert_eq!(status.error.as_deref(), Some("ping failed"));
    }

    #[test]
    fn test_cleanup_status_with_unstarted_task() {
        let body = r#"{
            "ttl_index": {"active": true, "expiry_time": "24 hours", "status": "Automatic deletion enabled"},
            "manual_cleanup": {"task_running": null, "frequency": "Every 1 hour", "purpose": "Backup to TTL + Session cleanup", "age_threshold": "24+ hours"},
            "recommendation": "TTL handles most cleanup automatically"
        }"#;
        let status: CleanupStatus = serde_json::from_str(body).unwrap();
        assert!(status.ttl_index.active);
        assert_eq!(status.manual_cleanup.task_running, None);
        assert_eq!(status.ttl_index.expiry_time.as_deref(), Some("24 hours"));
    }
}
