//! CLI entrypoint for CyberGavel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use gavel_application::{RoleSelections, RunTrialInput, RunTrialUseCase};
use gavel_domain::{ModelRegistry, Topic};
use gavel_infrastructure::{ConfigLoader, EnvCredentialSource, FileConfig, OpenAiChatGateway};
use gavel_presentation::{
    verdict_document, Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting CyberGavel");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{e}"))?
    };

    let registry = config.registry();

    if cli.list_models {
        println!("Configured models:");
        for label in registry.labels() {
            let descriptor = registry.get(label).unwrap();
            println!(
                "  {:<24} {:<24} {}",
                descriptor.label, descriptor.credential_key, descriptor.model_id
            );
        }
        return Ok(());
    }

    let topic = require_topic(cli.topic.as_deref())?;

    let rounds = cli.rounds.unwrap_or(config.trial.rounds);
    let rounds = if (1..=4).contains(&rounds) {
        rounds
    } else {
        let clamped = rounds.clamp(1, 4);
        warn!(requested = rounds, using = clamped, "Round count out of range, clamping");
        clamped
    };

    let selections = role_selections(&cli, &config, &registry)?;

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 CyberGavel - Court in Session              |");
        println!("+============================================================+");
        println!();
        println!("Case: {}", topic);
        println!(
            "Bench: judge={} plaintiff={} defendant={} jury={}",
            selections.judge, selections.plaintiff, selections.defendant, selections.default_juror
        );
        println!("Rounds: {}", rounds);
        println!();
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiChatGateway::new());
    let credentials = Arc::new(EnvCredentialSource::new());
    let use_case = RunTrialUseCase::new(gateway, Arc::new(registry), credentials);

    let input = RunTrialInput::new(topic, rounds, selections);

    // Execute with or without progress reporting; interactive terminals get
    // the animated bars, redirected stderr gets plain line output.
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    if let Some(path) = &cli.save {
        std::fs::write(path, verdict_document(&result))
            .with_context(|| format!("failed to write verdict document to {}", path.display()))?;
        if !cli.quiet {
            println!("Verdict document written to {}", path.display());
        }
    }

    Ok(())
}

/// Reject a missing or blank topic before any trial state is built.
fn require_topic(raw: Option<&str>) -> Result<Topic> {
    match raw.and_then(Topic::try_new) {
        Some(topic) => Ok(topic),
        None => bail!("A topic is required. Try: cybergavel \"Tabs or spaces?\""),
    }
}

/// Fold CLI flags over config-file defaults over the registry's first label.
fn role_selections(
    cli: &Cli,
    config: &FileConfig,
    registry: &ModelRegistry,
) -> Result<RoleSelections> {
    let fallback = match registry.labels().first() {
        Some(label) => label.to_string(),
        None => bail!("The model registry is empty; add a [[models]] entry to the config"),
    };

    let pick = |flag: &Option<String>, configured: &Option<String>| {
        flag.clone()
            .or_else(|| configured.clone())
            .unwrap_or_else(|| fallback.clone())
    };

    Ok(RoleSelections {
        judge: pick(&cli.judge, &config.roles.judge),
        plaintiff: pick(&cli.plaintiff, &config.roles.plaintiff),
        defendant: pick(&cli.defendant, &config.roles.defendant),
        default_juror: pick(&cli.juror, &config.roles.juror),
        juror_overrides: config.roles.jurors.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_topic_is_an_error() {
        let err = require_topic(None).unwrap_err();
        assert!(err.to_string().contains("topic is required"));
    }

    #[test]
    fn test_blank_topic_is_an_error_not_a_panic() {
        for blank in ["", "   "] {
            let err = require_topic(Some(blank)).unwrap_err();
            assert!(err.to_string().contains("topic is required"));
        }
    }

    #[test]
    fn test_real_topic_passes_through() {
        let topic = require_topic(Some("Tabs or spaces?")).unwrap();
        assert_eq!(topic.content(), "Tabs or spaces?");
    }
}
