//! LLM Gateway port
//!
//! Defines the interface for issuing one chat-completion round trip on
//! behalf of a role.

use async_trait::async_trait;
use gavel_domain::RoleConfig;
use thiserror::Error;

/// Errors that can occur during a single chat-completion call.
///
/// These never abort a trial: the orchestrator folds them into the record
/// as inline error text. They exist as a typed enum so adapters can report
/// precisely what went wrong.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// One call is one synchronous round trip: a two-message exchange (system
/// instruction + user content) completed at a fixed sampling temperature.
/// No retries, no streaming, no timeout beyond the transport default.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(
        &self,
        config: &RoleConfig,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, GatewayError>;
}
