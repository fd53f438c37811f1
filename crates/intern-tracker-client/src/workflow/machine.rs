/*
[INPUT]:  Current WorkflowState and a WorkflowEvent
[OUTPUT]: Next state plus effects, or a rejected transition
[POS]:    Workflow domain logic - state machine for one submission run
[UPDATE]: When workflow transitions or failure handling need refinement
*/

use thiserror::Error;

use crate::form::FormError;
use crate::wizard::{QuestionWizard, WizardError};
use crate::workflow::event::{Effect, Notice, RequestFailure, Screen, WorkflowEvent};
use crate::workflow::state::{
    Completion, FollowupSession, TempWorkUpdateRef, WorkflowStage, WorkflowState,
};

/// Errors that leave the workflow state unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Invalid transition: cannot handle {event} while {stage}")]
    InvalidTransition {
        stage: WorkflowStage,
        event: &'static str,
    },
    #[error(transparent)]
    IncompleteAnswers(WizardError),
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result of a successful transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: WorkflowState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: WorkflowState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

/// Pure transition function.
///
/// Only interactive states (idle, redirect, wizard, error, done) accept
/// events that issue a request, and each awaiting state only accepts the
/// response to its own request, so at most one request is ever in flight.
pub fn transition(
    state: &WorkflowState,
    event: WorkflowEvent,
) -> Result<Transition, WorkflowError> {
    let stage = state.stage();
    let event_name = event.name();
    let invalid = || WorkflowError::InvalidTransition {
        stage,
        event: event_name,
    };

    match (state, event) {
        (WorkflowState::Idle | WorkflowState::Done(_), WorkflowEvent::SubmitDraft(draft)) => {
            let next = WorkflowState::AwaitingCreateResponse { draft };
            let request = next.pending_request().ok_or_else(invalid)?;
            Ok(Transition::to(next, vec![Effect::Issue(request)]))
        }

        (WorkflowState::AwaitingCreateResponse { draft }, WorkflowEvent::CreateSucceeded(response)) => {
            if !draft.work_status.requires_followup() {
                let completion = Completion::LeaveRecorded {
                    work_update_id: response.work_update_id,
                    message: response.message,
                    is_override: response.is_override.unwrap_or(false),
                };
                return Ok(finish(completion));
            }

            match response.temp_work_update_id.filter(|id| !id.trim().is_empty()) {
                Some(temp_id) => Ok(Transition::to(
                    WorkflowState::AwaitingFollowupRedirect {
                        draft: draft.clone(),
                        temp_ref: TempWorkUpdateRef {
                            temp_id,
                            message: response.message,
                            ttl_expiry: response.ttl_expiry,
                        },
                    },
                    vec![Effect::Show(Screen::FollowupRedirect)],
                )),
                None => Ok(fail(
                    state,
                    RequestFailure::invalid_response(
                        "Invalid response: work update created without tempWorkUpdateId",
                    ),
                )),
            }
        }

        (
            WorkflowState::AwaitingFollowupRedirect { draft, temp_ref },
            WorkflowEvent::ConfirmFollowup,
        ) => {
            let next = WorkflowState::AwaitingSessionStart {
                draft: draft.clone(),
                temp_ref: temp_ref.clone(),
            };
            let request = next.pending_request().ok_or_else(invalid)?;
            Ok(Transition::to(next, vec![Effect::Issue(request)]))
        }

        (
            WorkflowState::AwaitingSessionStart { draft, temp_ref },
            WorkflowEvent::SessionStarted(response),
        ) => match QuestionWizard::new(response.questions.clone()) {
            Ok(wizard) => Ok(Transition::to(
                WorkflowState::AwaitingAnswers {
                    draft: draft.clone(),
                    temp_ref: temp_ref.clone(),
                    session: FollowupSession {
                        session_id: response.session_id,
                        questions: response.questions,
                        message: response.message,
                        reminder: response.reminder,
                    },
                    wizard,
                },
                vec![Effect::Show(Screen::Wizard)],
            )),
            Err(err) => Ok(fail(
                state,
                RequestFailure::invalid_response(format!("Invalid response: {err}")),
            )),
        },

        (
            WorkflowState::AwaitingAnswers {
                draft,
                temp_ref,
                session,
                wizard,
            },
            WorkflowEvent::SubmitAnswers,
        ) => {
            wizard.submit().map_err(WorkflowError::IncompleteAnswers)?;
            let next = WorkflowState::AwaitingCompleteResponse {
                draft: draft.clone(),
                temp_ref: temp_ref.clone(),
                session: session.clone(),
                wizard: wizard.clone(),
            };
            let request = next.pending_request().ok_or_else(invalid)?;
            Ok(Transition::to(next, vec![Effect::Issue(request)]))
        }

        (
            WorkflowState::AwaitingCompleteResponse { session, .. },
            WorkflowEvent::CompleteSucceeded(response),
        ) => Ok(finish(Completion::FollowupCompleted {
            session_id: session.session_id.clone(),
            work_update_id: response.work_update_id,
            message: response.message,
            note: response.note,
        })),

        (awaiting, WorkflowEvent::RequestFailed(failure)) if awaiting.is_in_flight() => {
            Ok(fail(awaiting, failure))
        }

        (WorkflowState::Error { awaiting, .. }, WorkflowEvent::Retry) => {
            let request = awaiting.pending_request().ok_or_else(invalid)?;
            Ok(Transition::to((**awaiting).clone(), vec![Effect::Issue(request)]))
        }

        (WorkflowState::Error { awaiting, .. }, WorkflowEvent::Dismiss) => {
            let (previous, screen) = awaiting.before_request().ok_or_else(invalid)?;
            Ok(Transition::to(previous, vec![Effect::Show(screen)]))
        }

        (
            WorkflowState::AwaitingFollowupRedirect { .. }
            | WorkflowState::AwaitingAnswers { .. }
            | WorkflowState::Error { .. }
            | WorkflowState::Done(_),
            WorkflowEvent::Close,
        ) => Ok(Transition::to(
            WorkflowState::Idle,
            vec![Effect::ResetForm, Effect::Show(Screen::Form)],
        )),

        _ => Err(invalid()),
    }
}

fn finish(completion: Completion) -> Transition {
    Transition::to(
        WorkflowState::Done(completion.clone()),
        vec![
            Effect::Notify(Notice::Completed(completion)),
            Effect::ResetForm,
            Effect::Show(Screen::Form),
        ],
    )
}

fn fail(awaiting: &WorkflowState, failure: RequestFailure) -> Transition {
    Transition::to(
        WorkflowState::Error {
            awaiting: Box::new(awaiting.clone()),
            failure: failure.clone(),
        },
        vec![Effect::Notify(Notice::Failed(failure))],
    )
}

/// State machine owning the single workflow state of a client
#[derive(Debug, Default)]
pub struct WorkflowMachine {
    state: WorkflowState,
}

impl WorkflowMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `event` would be accepted in the current state
    pub fn can_handle(&self, event: &WorkflowEvent) -> bool {
        transition(&self.state, event.clone()).is_ok()
    }

    /// Apply an event; on error the state is unchanged
    pub fn handle(&mut self, event: WorkflowEvent) -> Result<Vec<Effect>, WorkflowError> {
        let Transition { state, effects } = transition(&self.state, event)?;
        self.state = state;
        Ok(effects)
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn stage(&self) -> WorkflowStage {
        self.state.stage()
    }

    /// Wizard accepting input; `None` outside the answering stage
    pub fn wizard_mut(&mut self) -> Option<&mut QuestionWizard> {
        match &mut self.state {
            WorkflowState::AwaitingAnswers { wizard, .. } => Some(wizard),
            _ => None,
        }
    }
}
