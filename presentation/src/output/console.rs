//! Console output formatter for trial results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use gavel_domain::{Role, TrialResult};

/// Formats trial results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete trial result
    pub fn format(result: &TrialResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("CyberGavel - Trial Record"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Case:".cyan().bold(), result.topic));

        // Phase 1: Debate
        output.push_str(&Self::section_header("Phase 1: Opening Arguments"));
        for entry in result.transcript.entries() {
            let banner = match entry.role {
                Role::Plaintiff => format!("── 🦁 {} ──", entry.role.display_name())
                    .yellow()
                    .bold(),
                _ => format!("── 🦈 {} ──", entry.role.display_name())
                    .blue()
                    .bold(),
            };
            output.push_str(&format!("\n{}\n{}\n", banner, entry.content));
        }

        // Phase 2: Jury
        output.push_str(&Self::section_header("Phase 2: Jury Deliberation"));
        for opinion in &result.jury_opinions {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", opinion.juror).magenta().bold(),
                opinion.content
            ));
        }

        // Phase 3: Verdict
        output.push_str(&Self::section_header("Phase 3: Final Verdict"));
        output.push_str(&format!("\n{}\n", result.verdict));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &TrialResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format verdict only (concise output)
    pub fn format_verdict_only(result: &TrialResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Final Verdict ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Case:".bold(), result.topic));
        output.push_str(&result.verdict);
        output.push('\n');

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &TrialResult) -> String {
        ConsoleFormatter::format(result)
    }

    fn format_json(&self, result: &TrialResult) -> String {
        ConsoleFormatter::format_json(result)
    }

    fn format_verdict_only(&self, result: &TrialResult) -> String {
        ConsoleFormatter::format_verdict_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_domain::{JuryOpinion, Transcript};

    fn sample_result() -> TrialResult {
        let mut transcript = Transcript::open("X");
        transcript.append(Role::Plaintiff, "PL1");
        transcript.append(Role::Defendant, "DF1");
        TrialResult {
            topic: "X".to_string(),
            transcript,
            jury_opinions: vec![JuryOpinion::new("Pragmatic Pat", "J1")],
            verdict: "### Ruling\n**Plaintiff wins.**".to_string(),
        }
    }

    #[test]
    fn test_full_format_shows_every_phase() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&sample_result());
        assert!(output.contains("PL1"));
        assert!(output.contains("DF1"));
        assert!(output.contains("Pragmatic Pat"));
        assert!(output.contains("**Plaintiff wins.**"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let result = sample_result();
        let json = ConsoleFormatter::format_json(&result);
        let parsed: TrialResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_verdict_only_omits_the_debate() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_verdict_only(&sample_result());
        assert!(output.contains("Plaintiff wins."));
        assert!(!output.contains("PL1"));
    }
}
