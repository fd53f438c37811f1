/*
[INPUT]:  Raw field values typed by the user
[OUTPUT]: Validated WorkUpdateDraft ready for submission
[POS]:    Form layer - work update field state and validation
[UPDATE]: When form fields or validation rules change
*/

use intern_tracker_adapter::{WorkStatus, WorkUpdateDraft};
use thiserror::Error;

/// Description sent for leave days when the user leaves it blank
pub const ON_LEAVE_DESCRIPTION: &str = "On Leave";

/// Field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("User ID is required")]
    MissingUserId,
    #[error("Work update description is required when status is '{status}'")]
    MissingDescription { status: WorkStatus },
}

/// Fields of the work update form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkUpdateForm {
    pub user_id: String,
    pub work_status: WorkStatus,
    pub description: String,
    pub challenges: String,
    pub plans: String,
}

impl WorkUpdateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with a user id (e.g. from configuration)
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.user_id.trim().is_empty() {
            return Err(FormError::MissingUserId);
        }
        if self.work_status.requires_followup() && self.description.trim().is_empty() {
            return Err(FormError::MissingDescription {
                status: self.work_status,
            });
        }
        Ok(())
    }

    /// Validate and build the request payload.
    ///
    /// Leave days always send empty challenges/plans; their description
    /// falls back to [`ON_LEAVE_DESCRIPTION`].
    pub fn build_draft(&self) -> Result<WorkUpdateDraft, FormError> {
        self.validate()?;

        let user_id = self.user_id.trim().to_string();
        let description = self.description.trim();

        let draft = match self.work_status {
            WorkStatus::OnLeave => WorkUpdateDraft {
                user_id,
                work_status: WorkStatus::OnLeave,
                description: if description.is_empty() {
                    ON_LEAVE_DESCRIPTION.to_string()
                } else {
                    description.to_string()
                },
                challenges: String::new(),
                plans: String::new(),
            },
            status @ (WorkStatus::Working | WorkStatus::WorkFromHome) => WorkUpdateDraft {
                user_id,
                work_status: status,
                description: description.to_string(),
                challenges: self.challenges.trim().to_string(),
                plans: self.plans.trim().to_string(),
            },
        };
        Ok(draft)
    }

    /// Clear every field back to a fresh form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
