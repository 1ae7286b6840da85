//! Trial domain: roles, phases, and the proceeding record.
//!
//! A trial is one synchronous pass through three phases. The transcript is
//! append-only, owned by the orchestrator for the duration of a single run,
//! and discarded when the run ends — nothing persists across trials.

pub mod entities;
pub mod transcript;

pub use entities::{Phase, Role};
pub use transcript::{JuryOpinion, Transcript, TranscriptEntry, TrialResult};
