/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod followups;
pub mod health;
pub mod maintenance;
pub mod work_updates;

pub use error::{Result, TimeoutPhase, TrackerError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, InternTrackerClient};
