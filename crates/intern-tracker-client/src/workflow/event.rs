/*
[INPUT]:  User actions and backend responses
[OUTPUT]: Workflow events and the effects transitions ask the driver to perform
[POS]:    Workflow layer - event/effect vocabulary
[UPDATE]: When a user action, request or notification is added
*/

use intern_tracker_adapter::{
    CompleteFollowupResponse, CreateWorkUpdateResponse, StartFollowupResponse, TrackerError,
    WorkUpdateDraft,
};

use crate::workflow::state::Completion;

/// Everything that can drive the submission workflow
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    /// User submitted a validated draft
    SubmitDraft(WorkUpdateDraft),
    /// Response to request 1
    CreateSucceeded(CreateWorkUpdateResponse),
    /// User accepted the redirect to follow-up questions
    ConfirmFollowup,
    /// Response to request 2
    SessionStarted(StartFollowupResponse),
    /// User submitted the wizard answers
    SubmitAnswers,
    /// Response to request 3
    CompleteSucceeded(CompleteFollowupResponse),
    /// The in-flight request failed
    RequestFailed(RequestFailure),
    /// Re-issue the failed request unchanged
    Retry,
    /// Acknowledge a failure and go back to the screen that issued the request
    Dismiss,
    /// Abandon the run
    Close,
}

impl WorkflowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowEvent::SubmitDraft(_) => "submit draft",
            WorkflowEvent::CreateSucceeded(_) => "create response",
            WorkflowEvent::ConfirmFollowup => "confirm follow-up",
            WorkflowEvent::SessionStarted(_) => "session start response",
            WorkflowEvent::SubmitAnswers => "submit answers",
            WorkflowEvent::CompleteSucceeded(_) => "complete response",
            WorkflowEvent::RequestFailed(_) => "request failure",
            WorkflowEvent::Retry => "retry",
            WorkflowEvent::Dismiss => "dismiss",
            WorkflowEvent::Close => "close",
        }
    }
}

/// A backend call, carrying exactly the parameters it is issued with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    CreateWorkUpdate {
        draft: WorkUpdateDraft,
    },
    StartFollowup {
        temp_work_update_id: String,
        user_id: String,
    },
    CompleteFollowup {
        session_id: String,
        answers: Vec<String>,
    },
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::CreateWorkUpdate { .. } => "create work update",
            ApiRequest::StartFollowup { .. } => "start follow-up",
            ApiRequest::CompleteFollowup { .. } => "complete follow-up",
        }
    }
}

/// Failure of a backend call as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    /// HTTP status when the server answered
    pub status: Option<u16>,
    /// Full message, including status and raw body when available
    pub message: String,
    pub retryable: bool,
}

impl RequestFailure {
    /// Failure raised locally for a response the workflow cannot use
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            retryable: true,
        }
    }
}

impl From<&TrackerError> for RequestFailure {
    fn from(err: &TrackerError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
            retryable: err.is_retryable(),
        }
    }
}

/// Screen the front end should present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    FollowupRedirect,
    Wizard,
}

/// User-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Completed(Completion),
    Failed(RequestFailure),
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Issue(ApiRequest),
    Show(Screen),
    Notify(Notice),
    ResetForm,
}
