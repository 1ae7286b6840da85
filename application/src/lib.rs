//! Application layer for cybergavel
//!
//! This crate contains the trial orchestration use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_trial::{
    RoleSelections, RunTrialError, RunTrialInput, RunTrialUseCase, ERROR_MARKER,
};
