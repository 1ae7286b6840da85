//! The trial record: transcript, jury opinions, final result

use crate::trial::entities::Role;
use serde::{Deserialize, Serialize};

/// One contribution to the proceeding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
}

/// Append-only record of the debate, seeded with the case topic.
///
/// The rendered form is the growing context fed into later prompts; the
/// entry list is what gets formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    topic: String,
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Open the record for a case.
    pub fn open(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            entries: Vec::new(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            role,
            content: content.into(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// The concatenated textual record used as prompt context.
    pub fn rendered(&self) -> String {
        let mut out = format!("Case: {}\n", self.topic);
        for entry in &self.entries {
            out.push_str(&format!("\n[{}]: {}", entry.role.display_name(), entry.content));
        }
        out
    }

    /// A bounded trailing slice of the rendered record (most recent text),
    /// used to keep jury prompts a fixed size. Char-boundary safe.
    pub fn tail(&self, max_chars: usize) -> String {
        let rendered = self.rendered();
        let total = rendered.chars().count();
        if total <= max_chars {
            return rendered;
        }
        rendered.chars().skip(total - max_chars).collect()
    }
}

/// One juror's labeled commentary and vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuryOpinion {
    /// Persona display name.
    pub juror: String,
    /// The juror's commentary, or an inline error string if the call failed.
    pub content: String,
}

impl JuryOpinion {
    pub fn new(juror: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            juror: juror.into(),
            content: content.into(),
        }
    }

    /// The labeled form fed into the verdict prompt and shown in exports.
    pub fn labeled(&self) -> String {
        format!("[Juror {}]: {}", self.juror, self.content)
    }
}

/// The complete outcome of one trial run.
///
/// This is the orchestrator's entire output contract; it is handed to the
/// presentation layer and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    pub topic: String,
    pub transcript: Transcript,
    pub jury_opinions: Vec<JuryOpinion>,
    pub verdict: String,
}
