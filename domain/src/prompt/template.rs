//! Prompt templates for the trial flow

use crate::trial::transcript::JuryOpinion;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for plaintiff's counsel
    pub fn plaintiff_system() -> &'static str {
        r#"You are the plaintiff's counsel in a lighthearted mock courtroom.
You argue FOR the motion with wit and conviction. Build sharp, punchy
arguments, cite plausible everyday evidence, and never concede the floor.
Keep each statement under 150 words."#
    }

    /// System prompt for defendant's counsel
    pub fn defendant_system() -> &'static str {
        r#"You are the defendant's counsel in a lighthearted mock courtroom.
You argue AGAINST the motion with wit and composure. Dismantle the
opposition's claims point by point and advance your own case.
Keep each statement under 150 words."#
    }

    /// System prompt for the presiding judge
    pub fn judge_system() -> &'static str {
        r#"You are the presiding judge of a lighthearted mock courtroom.
You weigh both counsels' arguments and the jury's opinions, then deliver a
structured, impartial, mildly theatrical final verdict. You must pick a
winning side and justify the ruling."#
    }

    /// Plaintiff's round-0 prompt. Contains no reference to any prior
    /// argument — there is none yet.
    pub fn opening_argument(topic: &str) -> String {
        format!("Topic: '{}'. Present your opening argument.", topic)
    }

    /// Defendant's round-0 prompt: rebut the opening and state a case.
    pub fn opening_rebuttal(topic: &str, opponent_said: &str) -> String {
        format!(
            "Topic: '{}'. The plaintiff argued: '{}'. Rebut them and state your own case.",
            topic, opponent_said
        )
    }

    /// Plaintiff's prompt in later rounds.
    pub fn plaintiff_rebuttal(topic: &str, opponent_said: &str) -> String {
        format!(
            "Topic: '{}'. The defense argued: '{}'. Rebut them!",
            topic, opponent_said
        )
    }

    /// Defendant's prompt in later rounds.
    pub fn defendant_rebuttal(topic: &str, opponent_said: &str) -> String {
        format!(
            "Topic: '{}'. The plaintiff countered: '{}'. Strike back!",
            topic, opponent_said
        )
    }

    /// Jury-phase prompt: a bounded trailing slice of the transcript plus
    /// the persona's voice description.
    pub fn jury_commentary(transcript_tail: &str, style: &str) -> String {
        format!(
            "Trial record excerpt: ...{}\n\nComment on the debate in your own \
             style ({}) and cast your vote.",
            transcript_tail, style
        )
    }

    /// Verdict-phase prompt: the full transcript plus every labeled jury
    /// opinion, with formatting instructions for the ruling.
    pub fn verdict(transcript: &str, opinions: &[JuryOpinion]) -> String {
        let opinions_block = opinions
            .iter()
            .map(JuryOpinion::labeled)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"{}

================================================
[Key reference] The jury's votes and opinions:
{}
================================================

Weigh the debate record and the jury's views above, then deliver the final verdict.
Use clean Markdown formatting (### for headings, ** for bold emphasis)."#,
            transcript, opinions_block
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_argument_has_no_opponent_reference() {
        let prompt = PromptTemplate::opening_argument("Is tabs vs spaces worth fighting over?");
        assert!(prompt.contains("Is tabs vs spaces worth fighting over?"));
        assert!(!prompt.contains("argued"));
        assert!(!prompt.contains("countered"));
    }

    #[test]
    fn test_rebuttals_embed_the_opponent_verbatim() {
        let opponent = "Tabs are objectively superior.";
        for prompt in [
            PromptTemplate::opening_rebuttal("t", opponent),
            PromptTemplate::plaintiff_rebuttal("t", opponent),
            PromptTemplate::defendant_rebuttal("t", opponent),
        ] {
            assert!(prompt.contains(opponent));
        }
    }

    #[test]
    fn test_jury_prompt_carries_tail_and_style() {
        let prompt = PromptTemplate::jury_commentary("...recent arguments", "blunt, pragmatic");
        assert!(prompt.contains("...recent arguments"));
        assert!(prompt.contains("blunt, pragmatic"));
    }

    #[test]
    fn test_verdict_prompt_contains_record_and_every_opinion() {
        let opinions = vec![
            JuryOpinion::new("Pragmatic Pat", "Plaintiff had the facts."),
            JuryOpinion::new("Skeptical Sam", "Neither side proved much."),
        ];
        let prompt = PromptTemplate::verdict("Case: t\n[Plaintiff]: hello", &opinions);
        assert!(prompt.contains("Case: t\n[Plaintiff]: hello"));
        assert!(prompt.contains("[Juror Pragmatic Pat]: Plaintiff had the facts."));
        assert!(prompt.contains("[Juror Skeptical Sam]: Neither side proved much."));
        assert!(prompt.contains("### for headings"));
    }
}
