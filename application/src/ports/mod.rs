//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters implement.

pub mod llm_gateway;
pub mod progress;
