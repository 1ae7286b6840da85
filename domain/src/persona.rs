//! Jury personas
//!
//! A fixed panel of juror identities, each with its own voice. The panel is
//! process-wide, read-only, and initialized once at startup; jurors comment
//! in panel order during the jury phase.

use serde::{Deserialize, Serialize};

/// A fixed juror identity (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Stable id used for role addressing and per-juror model selection.
    pub id: String,
    /// Name shown on the juror's card and opinion label.
    pub display_name: String,
    /// Avatar glyph for display.
    pub avatar: String,
    /// One-line voice description injected into the jury prompt.
    pub style: String,
    /// System prompt steering the juror's responses.
    pub system_prompt: String,
}

impl Persona {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        avatar: impl Into<String>,
        style: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar: avatar.into(),
            style: style.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// The default four-seat panel, in speaking order.
    pub fn default_panel() -> Vec<Persona> {
        vec![
            Persona::new(
                "pragmatist",
                "Pragmatic Pat",
                "🛠️",
                "down-to-earth, cares only about what works in practice, distrusts grand theory",
                juror_prompt("a veteran practitioner who judges arguments by whether they would survive contact with the real world"),
            ),
            Persona::new(
                "idealist",
                "Idealist Iris",
                "🌈",
                "principled and passionate, argues from fairness and first principles",
                juror_prompt("an idealist who weighs arguments against principles of fairness, responsibility, and the greater good"),
            ),
            Persona::new(
                "skeptic",
                "Skeptical Sam",
                "🧐",
                "doubts every claim, demands evidence, enjoys poking holes",
                juror_prompt("a relentless skeptic who distrusts rhetoric and looks for the weakest link in each side's reasoning"),
            ),
            Persona::new(
                "peacemaker",
                "Mediator Mo",
                "🕊️",
                "empathetic, looks for common ground and the most balanced reading",
                juror_prompt("a mediator who tries to see what each side got right before deciding which case is stronger overall"),
            ),
        ]
    }
}

fn juror_prompt(character: &str) -> String {
    format!(
        "You are a juror in a lighthearted mock courtroom. You are {}. \
         Stay fully in character. Comment on the debate in under 120 words, \
         then end with one clear sentence voting for either the plaintiff \
         or the defendant.",
        character
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_ids_are_unique() {
        let panel = Persona::default_panel();
        let mut ids: Vec<_> = panel.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), panel.len());
    }

    #[test]
    fn test_every_juror_is_told_to_vote() {
        for persona in Persona::default_panel() {
            assert!(persona.system_prompt.contains("voting"));
            assert!(!persona.style.is_empty());
            assert!(!persona.avatar.is_empty());
        }
    }
}
