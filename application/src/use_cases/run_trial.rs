//! Run Trial use case
//!
//! Orchestrates the full courtroom flow: resolve and validate every role up
//! front, then debate rounds, jury deliberation, and the judge's verdict,
//! strictly one model call at a time.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use gavel_domain::{
    CredentialSource, JuryOpinion, ModelRegistry, Persona, Phase, PromptTemplate, RegistryError,
    Role, RoleConfig, Topic, Transcript, TrialResult,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Marker prefixed to inline error strings standing in for a failed call.
pub const ERROR_MARKER: &str = "🚨";

/// Character window of transcript context handed to each juror.
const JURY_CONTEXT_CHARS: usize = 800;

/// Errors that can occur during trial execution
///
/// Only setup-time failures abort a run. Per-call remote failures are folded
/// into the record as inline error text and the trial proceeds.
#[derive(Error, Debug)]
pub enum RunTrialError {
    #[error("Trial setup failed: {0}")]
    Setup(#[from] RegistryError),

    #[error("The jury panel is empty")]
    EmptyPanel,
}

/// Model label chosen for each role.
///
/// Jurors default to `default_juror`, with optional per-persona overrides
/// keyed by persona id.
#[derive(Debug, Clone)]
pub struct RoleSelections {
    pub judge: String,
    pub plaintiff: String,
    pub defendant: String,
    pub default_juror: String,
    pub juror_overrides: HashMap<String, String>,
}

impl RoleSelections {
    /// Every role bound to the same model label.
    pub fn uniform(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            judge: label.clone(),
            plaintiff: label.clone(),
            defendant: label.clone(),
            default_juror: label,
            juror_overrides: HashMap::new(),
        }
    }

    pub fn with_juror_override(
        mut self,
        persona_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.juror_overrides.insert(persona_id.into(), label.into());
        self
    }

    /// The label the given persona's juror speaks through.
    pub fn juror_label(&self, persona_id: &str) -> &str {
        self.juror_overrides
            .get(persona_id)
            .unwrap_or(&self.default_juror)
    }
}

/// Input for the RunTrial use case
#[derive(Debug, Clone)]
pub struct RunTrialInput {
    /// The disputed topic
    pub topic: Topic,
    /// Debate rounds; each round is one plaintiff and one defendant statement
    pub rounds: u32,
    /// Model label per role
    pub selections: RoleSelections,
}

impl RunTrialInput {
    pub fn new(topic: impl Into<Topic>, rounds: u32, selections: RoleSelections) -> Self {
        Self {
            topic: topic.into(),
            rounds,
            selections,
        }
    }
}

/// Use case for running a full trial
pub struct RunTrialUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    registry: Arc<ModelRegistry>,
    credentials: Arc<dyn CredentialSource>,
    panel: Vec<Persona>,
}

impl<G: LlmGateway + 'static> RunTrialUseCase<G> {
    pub fn new(
        gateway: Arc<G>,
        registry: Arc<ModelRegistry>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            gateway,
            registry,
            credentials,
            panel: Persona::default_panel(),
        }
    }

    /// Replace the default jury panel.
    pub fn with_panel(mut self, panel: Vec<Persona>) -> Self {
        self.panel = panel;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunTrialInput) -> Result<TrialResult, RunTrialError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunTrialInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<TrialResult, RunTrialError> {
        if self.panel.is_empty() {
            return Err(RunTrialError::EmptyPanel);
        }

        // SETUP: resolve and validate every role before any network call.
        // A misconfiguration must surface here, not mid-trial.
        let judge = self.resolve_role(&input.selections.judge)?;
        let plaintiff = self.resolve_role(&input.selections.plaintiff)?;
        let defendant = self.resolve_role(&input.selections.defendant)?;
        let jurors: Vec<(Persona, RoleConfig)> = self
            .panel
            .iter()
            .map(|persona| {
                let config = self.resolve_role(input.selections.juror_label(&persona.id))?;
                Ok((persona.clone(), config))
            })
            .collect::<Result<_, RegistryError>>()?;

        info!(
            topic = %input.topic,
            rounds = input.rounds,
            jurors = jurors.len(),
            "Court is in session"
        );

        let mut transcript = Transcript::open(input.topic.content());

        // DEBATE: alternate plaintiff/defendant, handing the immediately
        // preceding argument across as rebuttal context.
        progress.on_phase_start(&Phase::Debate, (input.rounds as usize) * 2);
        let mut last_argument = String::new();

        for round in 0..input.rounds {
            let prompt = if round == 0 {
                PromptTemplate::opening_argument(input.topic.content())
            } else {
                PromptTemplate::plaintiff_rebuttal(input.topic.content(), &last_argument)
            };
            let statement = self
                .speak(
                    progress,
                    &Phase::Debate,
                    &Role::Plaintiff,
                    &plaintiff,
                    PromptTemplate::plaintiff_system(),
                    &prompt,
                )
                .await;
            last_argument = statement.clone();
            transcript.append(Role::Plaintiff, statement);

            let prompt = if round == 0 {
                PromptTemplate::opening_rebuttal(input.topic.content(), &last_argument)
            } else {
                PromptTemplate::defendant_rebuttal(input.topic.content(), &last_argument)
            };
            let statement = self
                .speak(
                    progress,
                    &Phase::Debate,
                    &Role::Defendant,
                    &defendant,
                    PromptTemplate::defendant_system(),
                    &prompt,
                )
                .await;
            last_argument = statement.clone();
            transcript.append(Role::Defendant, statement);
        }
        progress.on_phase_complete(&Phase::Debate);

        // JURY: one opinion per persona, in panel order. No juror sees
        // another juror's output, only the debate record.
        progress.on_phase_start(&Phase::Jury, jurors.len());
        let mut jury_opinions = Vec::new();

        for (persona, config) in &jurors {
            let role = Role::Juror(persona.id.clone());
            let prompt = PromptTemplate::jury_commentary(
                &transcript.tail(JURY_CONTEXT_CHARS),
                &persona.style,
            );
            let opinion = self
                .speak_as(
                    progress,
                    &Phase::Jury,
                    &role,
                    &persona.display_name,
                    config,
                    &persona.system_prompt,
                    &prompt,
                )
                .await;
            jury_opinions.push(JuryOpinion::new(&persona.display_name, opinion));
        }
        progress.on_phase_complete(&Phase::Jury);

        // VERDICT: one judge call over the full record and every opinion.
        progress.on_phase_start(&Phase::Verdict, 1);
        let prompt = PromptTemplate::verdict(&transcript.rendered(), &jury_opinions);
        let verdict = self
            .speak(
                progress,
                &Phase::Verdict,
                &Role::Judge,
                &judge,
                PromptTemplate::judge_system(),
                &prompt,
            )
            .await;
        progress.on_phase_complete(&Phase::Verdict);

        info!("Verdict delivered");

        Ok(TrialResult {
            topic: input.topic.content().to_string(),
            transcript,
            jury_opinions,
            verdict,
        })
    }

    fn resolve_role(&self, label: &str) -> Result<RoleConfig, RegistryError> {
        self.registry
            .resolve(label, self.credentials.as_ref())?
            .require_usable()
    }

    async fn speak(
        &self,
        progress: &dyn ProgressNotifier,
        phase: &Phase,
        role: &Role,
        config: &RoleConfig,
        system_prompt: &str,
        user_message: &str,
    ) -> String {
        self.speak_as(
            progress,
            phase,
            role,
            &config.label,
            config,
            system_prompt,
            user_message,
        )
        .await
    }

    /// Issue one call and return its text. A failed call does not abort the
    /// trial: it yields an inline error string naming the role's model label,
    /// which is carried forward exactly like a successful response.
    async fn speak_as(
        &self,
        progress: &dyn ProgressNotifier,
        phase: &Phase,
        role: &Role,
        speaker: &str,
        config: &RoleConfig,
        system_prompt: &str,
        user_message: &str,
    ) -> String {
        progress.on_speaker_start(phase, role, speaker);
        debug!(%phase, %role, model = %config.label, "Issuing chat completion");

        let (text, success) = match self
            .gateway
            .complete(config, system_prompt, user_message)
            .await
        {
            Ok(text) => (text, true),
            Err(e) => {
                warn!(%role, model = %config.label, error = %e, "Model call failed, carrying inline error");
                (
                    format!("{} **Error ({})**: {}", ERROR_MARKER, config.label, e),
                    false,
                )
            }
        };

        progress.on_task_complete(phase, role, speaker, success);
        text
    }
}
