//! Progress notification port
//!
//! Defines the interface for reporting progress during a trial run.

use gavel_domain::{Phase, Role};

/// Callback for progress updates during trial execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console bars, plain text, etc.). Callbacks
/// fire in strict phase/speaker order because the orchestrator itself is
/// strictly sequential.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called just before a role's model call is issued
    fn on_speaker_start(&self, phase: &Phase, role: &Role, speaker: &str);

    /// Called when a role's contribution is in (success or inline error)
    fn on_task_complete(&self, phase: &Phase, role: &Role, speaker: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_speaker_start(&self, _phase: &Phase, _role: &Role, _speaker: &str) {}
    fn on_task_complete(&self, _phase: &Phase, _role: &Role, _speaker: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
