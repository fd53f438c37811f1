/*
[INPUT]:  Draft, backend references and wizard produced along a submission
[OUTPUT]: Tagged workflow state with the data each stage owns
[POS]:    Workflow layer - state definitions
[UPDATE]: When a workflow stage is added or starts carrying new data
*/

use intern_tracker_adapter::WorkUpdateDraft;
use std::fmt;

use crate::wizard::QuestionWizard;
use crate::workflow::event::{ApiRequest, RequestFailure, Screen};

/// Provisional work update created by request 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempWorkUpdateRef {
    pub temp_id: String,
    /// Server instructions, e.g. the deadline for the follow-up
    pub message: Option<String>,
    /// When the backend deletes the provisional update if left unfinished
    pub ttl_expiry: Option<String>,
}

impl TempWorkUpdateRef {
    pub fn new(temp_id: impl Into<String>) -> Self {
        Self {
            temp_id: temp_id.into(),
            message: None,
            ttl_expiry: None,
        }
    }

    /// Text for the redirect screen
    pub fn notice(&self) -> String {
        let mut notice = self.message.clone().unwrap_or_else(|| {
            "Work update saved temporarily. Complete the follow-up to finalize it.".to_string()
        });
        if let Some(expiry) = &self.ttl_expiry {
            notice.push_str(&format!(" Unfinished updates are deleted {expiry}."));
        }
        notice
    }
}

/// Follow-up session returned by request 2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowupSession {
    pub session_id: String,
    pub questions: Vec<String>,
    pub message: Option<String>,
    /// Deadline reminder shown alongside the questions
    pub reminder: Option<String>,
}

/// How a workflow run finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Leave day stored directly, no follow-up
    LeaveRecorded {
        work_update_id: Option<String>,
        message: Option<String>,
        /// An update for the same day was replaced
        is_override: bool,
    },
    /// Follow-up answered and the work update finalized
    FollowupCompleted {
        session_id: String,
        work_update_id: Option<String>,
        message: Option<String>,
        note: Option<String>,
    },
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::LeaveRecorded {
                message,
                is_override,
                ..
            } => {
                f.write_str(message.as_deref().unwrap_or("Leave status saved successfully"))?;
                if *is_override {
                    f.write_str(" (replaced today's earlier update)")?;
                }
                Ok(())
            }
            Completion::FollowupCompleted { message, note, .. } => {
                f.write_str(
                    message
                        .as_deref()
                        .unwrap_or("Follow-up completed, work update finalized"),
                )?;
                if let Some(note) = note {
                    write!(f, " ({note})")?;
                }
                Ok(())
            }
        }
    }
}

/// Stage of the workflow without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Idle,
    AwaitingCreateResponse,
    AwaitingFollowupRedirect,
    AwaitingSessionStart,
    AwaitingAnswers,
    AwaitingCompleteResponse,
    Done,
    Error,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowStage::Idle => "idle",
            WorkflowStage::AwaitingCreateResponse => "awaiting create response",
            WorkflowStage::AwaitingFollowupRedirect => "awaiting follow-up redirect",
            WorkflowStage::AwaitingSessionStart => "awaiting session start",
            WorkflowStage::AwaitingAnswers => "awaiting answers",
            WorkflowStage::AwaitingCompleteResponse => "awaiting complete response",
            WorkflowStage::Done => "done",
            WorkflowStage::Error => "error",
        };
        f.write_str(name)
    }
}

/// Submission workflow state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    AwaitingCreateResponse {
        draft: WorkUpdateDraft,
    },
    AwaitingFollowupRedirect {
        draft: WorkUpdateDraft,
        temp_ref: TempWorkUpdateRef,
    },
    AwaitingSessionStart {
        draft: WorkUpdateDraft,
        temp_ref: TempWorkUpdateRef,
    },
    AwaitingAnswers {
        draft: WorkUpdateDraft,
        temp_ref: TempWorkUpdateRef,
        session: FollowupSession,
        wizard: QuestionWizard,
    },
    /// Wizard is kept read-only so a failed request 3 resumes with the answers intact
    AwaitingCompleteResponse {
        draft: WorkUpdateDraft,
        temp_ref: TempWorkUpdateRef,
        session: FollowupSession,
        wizard: QuestionWizard,
    },
    Done(Completion),
    /// `awaiting` is the state whose request failed; retry re-enters it unchanged
    Error {
        awaiting: Box<WorkflowState>,
        failure: RequestFailure,
    },
}

impl WorkflowState {
    pub fn stage(&self) -> WorkflowStage {
        match self {
            WorkflowState::Idle => WorkflowStage::Idle,
            WorkflowState::AwaitingCreateResponse { .. } => WorkflowStage::AwaitingCreateResponse,
            WorkflowState::AwaitingFollowupRedirect { .. } => {
                WorkflowStage::AwaitingFollowupRedirect
            }
            WorkflowState::AwaitingSessionStart { .. } => WorkflowStage::AwaitingSessionStart,
            WorkflowState::AwaitingAnswers { .. } => WorkflowStage::AwaitingAnswers,
            WorkflowState::AwaitingCompleteResponse { .. } => {
                WorkflowStage::AwaitingCompleteResponse
            }
            WorkflowState::Done(_) => WorkflowStage::Done,
            WorkflowState::Error { .. } => WorkflowStage::Error,
        }
    }

    /// Request whose response this state waits for
    pub fn pending_request(&self) -> Option<ApiRequest> {
        match self {
            WorkflowState::AwaitingCreateResponse { draft } => Some(ApiRequest::CreateWorkUpdate {
                draft: draft.clone(),
            }),
            WorkflowState::AwaitingSessionStart { draft, temp_ref } => {
                Some(ApiRequest::StartFollowup {
                    temp_work_update_id: temp_ref.temp_id.clone(),
                    user_id: draft.user_id.clone(),
                })
            }
            WorkflowState::AwaitingCompleteResponse {
                session, wizard, ..
            } => Some(ApiRequest::CompleteFollowup {
                session_id: session.session_id.clone(),
                answers: wizard.answers().as_slice().to_vec(),
            }),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending_request().is_some()
    }

    /// Interactive state that issued this state's request
    pub(crate) fn before_request(&self) -> Option<(WorkflowState, Screen)> {
        match self {
            WorkflowState::AwaitingCreateResponse { .. } => {
                Some((WorkflowState::Idle, Screen::Form))
            }
            WorkflowState::AwaitingSessionStart { draft, temp_ref } => Some((
                WorkflowState::AwaitingFollowupRedirect {
                    draft: draft.clone(),
                    temp_ref: temp_ref.clone(),
                },
                Screen::FollowupRedirect,
            )),
            WorkflowState::AwaitingCompleteResponse {
                draft,
                temp_ref,
                session,
                wizard,
            } => Some((
                WorkflowState::AwaitingAnswers {
                    draft: draft.clone(),
                    temp_ref: temp_ref.clone(),
                    session: session.clone(),
                    wizard: wizard.clone(),
                },
                Screen::Wizard,
            )),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&WorkUpdateDraft> {
        match self {
            WorkflowState::AwaitingCreateResponse { draft }
            | WorkflowState::AwaitingFollowupRedirect { draft, .. }
            | WorkflowState::AwaitingSessionStart { draft, .. }
            | WorkflowState::AwaitingAnswers { draft, .. }
            | WorkflowState::AwaitingCompleteResponse { draft, .. } => Some(draft),
            WorkflowState::Error { awaiting, .. } => awaiting.draft(),
            WorkflowState::Idle | WorkflowState::Done(_) => None,
        }
    }

    pub fn temp_ref(&self) -> Option<&TempWorkUpdateRef> {
        match self {
            WorkflowState::AwaitingFollowupRedirect { temp_ref, .. }
            | WorkflowState::AwaitingSessionStart { temp_ref, .. }
            | WorkflowState::AwaitingAnswers { temp_ref, .. }
            | WorkflowState::AwaitingCompleteResponse { temp_ref, .. } => Some(temp_ref),
            WorkflowState::Error { awaiting, .. } => awaiting.temp_ref(),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&FollowupSession> {
        match self {
            WorkflowState::AwaitingAnswers { session, .. }
            | WorkflowState::AwaitingCompleteResponse { session, .. } => Some(session),
            WorkflowState::Error { awaiting, .. } => awaiting.session(),
            _ => None,
        }
    }

    /// Wizard in any stage that has one (read-only)
    pub fn wizard(&self) -> Option<&QuestionWizard> {
        match self {
            WorkflowState::AwaitingAnswers { wizard, .. }
            | WorkflowState::AwaitingCompleteResponse { wizard, .. } => Some(wizard),
            WorkflowState::Error { awaiting, .. } => awaiting.wizard(),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            WorkflowState::Error { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn completion(&self) -> Option<&Completion> {
        match self {
            WorkflowState::Done(completion) => Some(completion),
            _ => None,
        }
    }
}
