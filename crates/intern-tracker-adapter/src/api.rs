/*
[INPUT]:  Work update drafts, temporary ids, session ids and answers
[OUTPUT]: Backend responses for the three-step submission sequence
[POS]:    API abstraction - seam between workflow driver and transport
[UPDATE]: When the submission sequence gains or changes a request
*/

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::http::{InternTrackerClient, Result, TrackerError};
use crate::types::{
    CompleteFollowupResponse, CreateWorkUpdateResponse, StartFollowupResponse, WorkUpdateDraft,
};

/// Backend operations used by the submission workflow
///
/// Implemented by [`InternTrackerClient`]; swap in [`MockWorkUpdateApi`]
/// to drive the workflow without a server.
#[async_trait]
pub trait WorkUpdateApi: Send + Sync {
    /// Request 1: create the (temporary) work update
    async fn create_work_update(&self, draft: &WorkUpdateDraft) -> Result<CreateWorkUpdateResponse>;

    /// Request 2: start the follow-up session for a temporary work update
    async fn start_followup(
        &self,
        temp_work_update_id: &str,
        user_id: &str,
    ) -> Result<StartFollowupResponse>;

    /// Request 3: submit answers and finalize the work update
    async fn complete_followup(
        &self,
        session_id: &str,
        answers: &[String],
    ) -> Result<CompleteFollowupResponse>;
}

#[async_trait]
impl WorkUpdateApi for InternTrackerClient {
    async fn create_work_update(&self, draft: &WorkUpdateDraft) -> Result<CreateWorkUpdateResponse> {
        InternTrackerClient::create_work_update(self, draft).await
    }

    async fn start_followup(
        &self,
        temp_work_update_id: &str,
        user_id: &str,
    ) -> Result<StartFollowupResponse> {
        InternTrackerClient::start_followup(self, temp_work_update_id, user_id).await
    }

    async fn complete_followup(
        &self,
        session_id: &str,
        answers: &[String],
    ) -> Result<CompleteFollowupResponse> {
        InternTrackerClient::complete_followup(self, session_id, answers).await
    }
}

/// A call observed by [`MockWorkUpdateApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    CreateWorkUpdate(WorkUpdateDraft),
    StartFollowup {
        temp_work_update_id: String,
        user_id: String,
    },
    CompleteFollowup {
        session_id: String,
        answers: Vec<String>,
    },
}

/// Mock API for testing: replays queued responses and records every call
#[derive(Debug, Default)]
pub struct MockWorkUpdateApi {
    create: Mutex<VecDeque<Result<CreateWorkUpdateResponse>>>,
    start: Mutex<VecDeque<Result<StartFollowupResponse>>>,
    complete: Mutex<VecDeque<Result<CompleteFollowupResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockWorkUpdateApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_create(&self, response: Result<CreateWorkUpdateResponse>) -> &Self {
        lock(&self.create).push_back(response);
        self
    }

    pub fn push_start(&self, response: Result<StartFollowupResponse>) -> &Self {
        lock(&self.start).push_back(response);
        self
    }

    pub fn push_complete(&self, response: Result<CompleteFollowupResponse>) -> &Self {
        lock(&self.complete).push_back(response);
        self
    }

    /// Calls in the order they were made
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: RecordedCall) {
        lock(&self.calls).push(call);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn unscripted(endpoint: &str) -> TrackerError {
    TrackerError::InvalidResponse(format!("no scripted response for {endpoint}"))
}

#[async_trait]
impl WorkUpdateApi for MockWorkUpdateApi {
    async fn create_work_update(&self, draft: &WorkUpdateDraft) -> Result<CreateWorkUpdateResponse> {
        self.record(RecordedCall::CreateWorkUpdate(draft.clone()));
        lock(&self.create)
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("create_work_update")))
    }

    async fn start_followup(
        &self,
        temp_work_update_id: &str,
        user_id: &str,
    ) -> Result<StartFollowupResponse> {
        self.record(RecordedCall::StartFollowup {
            temp_work_update_id: temp_work_update_id.to_string(),
            user_id: user_id.to_string(),
        });
        lock(&self.start)
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("start_followup")))
    }

    async fn complete_followup(
        &self,
        session_id: &str,
        answers: &[String],
    ) -> Result<CompleteFollowupResponse> {
        self.record(RecordedCall::CompleteFollowup {
            session_id: session_id.to_string(),
            answers: answers.to_vec(),
        });
        lock(&self.complete)
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("complete_followup")))
    }
}
