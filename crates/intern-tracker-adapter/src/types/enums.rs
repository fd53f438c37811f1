/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily status reported with a work update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    #[default]
    Working,
    WorkFromHome,
    OnLeave,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 3] = [
        WorkStatus::Working,
        WorkStatus::WorkFromHome,
        WorkStatus::OnLeave,
    ];

    /// Wire value used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Working => "working",
            WorkStatus::WorkFromHome => "work_from_home",
            WorkStatus::OnLeave => "on_leave",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Working => "Working",
            WorkStatus::WorkFromHome => "Work from home",
            WorkStatus::OnLeave => "On leave",
        }
    }

    /// Whether a submission with this status continues into a follow-up session
    pub fn requires_followup(&self) -> bool {
        !matches!(self, WorkStatus::OnLeave)
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Completed,
}
