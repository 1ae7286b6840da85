//! Output formatter trait

use gavel_domain::TrialResult;

/// Trait for formatting trial results
pub trait OutputFormatter {
    /// Format the complete trial result
    fn format(&self, result: &TrialResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &TrialResult) -> String;

    /// Format verdict only (concise output)
    fn format_verdict_only(&self, result: &TrialResult) -> String;
}
