//! Trial entities: participant roles and run phases

use serde::{Deserialize, Serialize};

/// A function a participant plays in the proceeding (Value Object)
///
/// Each role is independently bound to a selectable model. Jurors carry the
/// persona id they speak for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Judge,
    Plaintiff,
    Defendant,
    Juror(String),
}

impl Role {
    /// Short display name used when labeling transcript entries.
    pub fn display_name(&self) -> &str {
        match self {
            Role::Judge => "Judge",
            Role::Plaintiff => "Plaintiff",
            Role::Defendant => "Defendant",
            Role::Juror(_) => "Juror",
        }
    }

    /// The opposing counsel, for debate-phase handoff. Only meaningful for
    /// the two lawyer roles.
    pub fn opponent(&self) -> Option<Role> {
        match self {
            Role::Plaintiff => Some(Role::Defendant),
            Role::Defendant => Some(Role::Plaintiff),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Juror(id) => write!(f, "Juror({})", id),
            other => write!(f, "{}", other.display_name()),
        }
    }
}

/// Phase of a trial run
///
/// Phases run strictly in order with no branching back. `Setup` is not
/// represented: a run that fails validation never produces partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Debate phase - plaintiff and defendant argue in alternating rounds
    Debate,
    /// Jury phase - each persona comments on the debate and votes
    Jury,
    /// Verdict phase - the judge rules on the record and the jury's views
    Verdict,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Debate => "debate",
            Phase::Jury => "jury",
            Phase::Verdict => "verdict",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Debate => "Opening Arguments",
            Phase::Jury => "Jury Deliberation",
            Phase::Verdict => "Final Verdict",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lawyers_oppose_each_other() {
        assert_eq!(Role::Plaintiff.opponent(), Some(Role::Defendant));
        assert_eq!(Role::Defendant.opponent(), Some(Role::Plaintiff));
        assert_eq!(Role::Judge.opponent(), None);
        assert_eq!(Role::Juror("skeptic".to_string()).opponent(), None);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Debate.as_str(), "debate");
        assert_eq!(Phase::Verdict.to_string(), "Final Verdict");
    }
}
