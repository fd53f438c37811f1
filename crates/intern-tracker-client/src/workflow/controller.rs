/*
[INPUT]:  User-level workflow events and a WorkUpdateApi implementation
[OUTPUT]: Effects for the front end after every request has resolved
[POS]:    Workflow driver - executes requests emitted by transitions
[UPDATE]: When effects gain new kinds or requests change shape
*/

use intern_tracker_adapter::WorkUpdateApi;
use tracing::{debug, info, warn};

use crate::form::WorkUpdateForm;
use crate::wizard::QuestionWizard;
use crate::workflow::event::{ApiRequest, Effect, RequestFailure, WorkflowEvent};
use crate::workflow::machine::{WorkflowError, WorkflowMachine};
use crate::workflow::state::{WorkflowStage, WorkflowState};

/// Owns one workflow and the API it talks to.
///
/// `dispatch` takes `&mut self` and awaits each request before feeding its
/// outcome back into the machine, so requests never overlap.
pub struct WorkflowController<A: WorkUpdateApi> {
    api: A,
    machine: WorkflowMachine,
}

impl<A: WorkUpdateApi> WorkflowController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            machine: WorkflowMachine::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &WorkflowState {
        self.machine.state()
    }

    pub fn stage(&self) -> WorkflowStage {
        self.machine.stage()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut QuestionWizard> {
        self.machine.wizard_mut()
    }

    /// Validate the form and submit it; validation errors issue no request
    pub async fn submit_form(&mut self, form: &WorkUpdateForm) -> Result<Vec<Effect>, WorkflowError> {
        let draft = form.build_draft()?;
        self.dispatch(WorkflowEvent::SubmitDraft(draft)).await
    }

    /// Apply an event and run every request it leads to.
    ///
    /// Returns the non-request effects (screens, notices, form reset) in
    /// the order they were produced.
    pub async fn dispatch(&mut self, event: WorkflowEvent) -> Result<Vec<Effect>, WorkflowError> {
        let mut surfaced = Vec::new();
        let mut next = Some(event);

        while let Some(event) = next.take() {
            debug!(event = event.name(), stage = %self.stage(), "handling workflow event");
            for effect in self.machine.handle(event)? {
                match effect {
                    Effect::Issue(request) => {
                        next = Some(self.execute(request).await);
                    }
                    other => surfaced.push(other),
                }
            }
        }

        Ok(surfaced)
    }

    async fn execute(&self, request: ApiRequest) -> WorkflowEvent {
        info!(request = request.name(), "issuing request");

        let outcome = match &request {
            ApiRequest::CreateWorkUpdate { draft } => self
                .api
                .create_work_update(draft)
                .await
                .map(WorkflowEvent::CreateSucceeded),
            ApiRequest::StartFollowup {
                temp_work_update_id,
                user_id,
            } => self
                .api
                .start_followup(temp_work_update_id, user_id)
                .await
                .map(WorkflowEvent::SessionStarted),
            ApiRequest::CompleteFollowup {
                session_id,
                answers,
            } => self
                .api
                .complete_followup(session_id, answers)
                .await
                .map(WorkflowEvent::CompleteSucceeded),
        };

        outcome.unwrap_or_else(|err| {
            warn!(request = request.name(), error = %err, "request failed");
            WorkflowEvent::RequestFailed(RequestFailure::from(&err))
        })
    }
}
