/*
[INPUT]:  Public API exports for intern-tracker-client crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod form;
pub mod wizard;
pub mod workflow;

// Re-export main types for convenience
pub use config::AppConfig;
pub use form::{FormError, WorkUpdateForm};
pub use wizard::{AnswerBuffer, QuestionWizard, WizardError};
pub use workflow::{
    Completion, Effect, Notice, RequestFailure, Screen, WorkflowController, WorkflowError,
    WorkflowEvent, WorkflowStage, WorkflowState,
};
