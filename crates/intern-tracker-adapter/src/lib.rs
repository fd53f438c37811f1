/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public intern tracker adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod http;
pub mod types;

pub use api::{MockWorkUpdateApi, RecordedCall, WorkUpdateApi};

// Re-export commonly used types from http
pub use http::{
    ClientConfig, DEFAULT_BASE_URL, InternTrackerClient, Result, TimeoutPhase, TrackerError,
};

// Re-export all types
pub use types::*;
