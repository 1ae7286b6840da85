//! Domain layer for cybergavel
//!
//! This crate contains the core courtroom entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Trial
//!
//! A trial is a single sequential proceeding over a disputed topic:
//!
//! - **Debate**: plaintiff and defendant counsel argue in alternating rounds
//! - **Jury**: a fixed panel of personas comments and votes on the debate
//! - **Verdict**: the judge weighs the record and the jury and rules
//!
//! ## Roles and models
//!
//! Every role (judge, plaintiff, defendant, each juror) is independently
//! bound to a backend model via the [`registry::ModelRegistry`].

pub mod core;
pub mod persona;
pub mod prompt;
pub mod registry;
pub mod trial;

// Re-export commonly used types
pub use self::core::{error::RegistryError, topic::Topic};
pub use persona::Persona;
pub use prompt::PromptTemplate;
pub use registry::{CredentialSource, ModelDescriptor, ModelRegistry, RoleConfig};
pub use trial::{
    entities::{Phase, Role},
    transcript::{JuryOpinion, Transcript, TranscriptEntry, TrialResult},
};
