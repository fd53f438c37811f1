/*
[INPUT]:  Form submissions, user navigation and backend responses
[OUTPUT]: Submission workflow state machine and its driver
[POS]:    Workflow layer - module wiring
[UPDATE]: When workflow modules or exports change
*/

pub mod controller;
pub mod event;
pub mod machine;
pub mod state;

pub use controller::WorkflowController;
pub use event::{ApiRequest, Effect, Notice, RequestFailure, Screen, WorkflowEvent};
pub use machine::{Transition, WorkflowError, WorkflowMachine, transition};
pub use state::{Completion, FollowupSession, TempWorkUpdateRef, WorkflowStage, WorkflowState};
