//! Progress reporting for trial execution

use colored::Colorize;
use gavel_application::ports::progress::ProgressNotifier;
use gavel_domain::{Phase, Role};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Pause after each juror's card so the deliberation reads as taking turns.
const JUROR_PAUSE: Duration = Duration::from_millis(200);

/// Reports progress during trial execution with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Debate => "Phase 1: Opening Arguments",
            Phase::Jury => "Phase 2: Jury Deliberation",
            Phase::Verdict => "Phase 3: Final Verdict",
        }
    }

    fn phase_short_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Debate => "Phase 1",
            Phase::Jury => "Phase 2",
            Phase::Verdict => "Phase 3",
        }
    }

    fn speaker_glyph(role: &Role) -> &'static str {
        match role {
            Role::Judge => "👨‍⚖️",
            Role::Plaintiff => "🦁",
            Role::Defendant => "🦈",
            Role::Juror(_) => "👥",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase).to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting...");

        *self.phase_bar.lock().unwrap() = Some(pb);
    }

    fn on_speaker_start(&self, phase: &Phase, role: &Role, speaker: &str) {
        if let Some(pb) = self.phase_bar.lock().unwrap().as_ref() {
            let verb = match phase {
                Phase::Debate => "preparing arguments",
                Phase::Jury => "deliberating",
                Phase::Verdict => "reviewing the record",
            };
            pb.set_message(format!("{} {} {}...", Self::speaker_glyph(role), speaker, verb));
        }
    }

    fn on_task_complete(&self, phase: &Phase, role: &Role, speaker: &str, success: bool) {
        if let Some(pb) = self.phase_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), speaker)
            } else {
                format!("{} {}", "x".red(), speaker)
            };
            pb.set_message(status);
            pb.inc(1);
        }
        if matches!((phase, role), (Phase::Jury, Role::Juror(_))) {
            // Cosmetic pacing so jurors visibly speak one at a time.
            std::thread::sleep(JUROR_PAUSE);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Some(pb) = self.phase_bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} complete!",
                Self::phase_short_name(phase).green()
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        println!(
            "{} {} ({} statements)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase).bold(),
            total_tasks
        );
    }

    fn on_speaker_start(&self, _phase: &Phase, _role: &Role, _speaker: &str) {}

    fn on_task_complete(&self, _phase: &Phase, _role: &Role, speaker: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), speaker);
        } else {
            println!("  {} {} (failed)", "x".red(), speaker);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display_names_number_the_phases() {
        assert_eq!(
            ProgressReporter::phase_display_name(&Phase::Debate),
            "Phase 1: Opening Arguments"
        );
        assert_eq!(
            ProgressReporter::phase_display_name(&Phase::Verdict),
            "Phase 3: Final Verdict"
        );
    }

    #[test]
    fn test_simple_progress_drives_a_full_phase_as_a_notifier() {
        colored::control::set_override(false);
        let progress: &dyn ProgressNotifier = &SimpleProgress;
        progress.on_phase_start(&Phase::Jury, 2);
        progress.on_speaker_start(&Phase::Jury, &Role::Juror("pragmatist".to_string()), "Pat");
        progress.on_task_complete(&Phase::Jury, &Role::Juror("pragmatist".to_string()), "Pat", true);
        progress.on_task_complete(&Phase::Jury, &Role::Juror("skeptic".to_string()), "Sam", false);
        progress.on_phase_complete(&Phase::Jury);
    }
}
