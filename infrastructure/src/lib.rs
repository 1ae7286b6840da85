//! Infrastructure layer for cybergavel
//!
//! This crate contains adapters that implement the ports defined in the
//! application and domain layers: the OpenAI-compatible HTTP gateway, the
//! environment credential source, and configuration file loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileModelEntry, FileRolesConfig, FileTrialConfig};
pub use credentials::EnvCredentialSource;
pub use providers::OpenAiChatGateway;
