//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`] — a validated disputed topic to put on trial
//! - [`error::RegistryError`] — model registry and configuration errors

pub mod error;
pub mod topic;
