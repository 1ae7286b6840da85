//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for trial results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all phases
    Full,
    /// Only the final verdict
    Verdict,
    /// JSON output
    Json,
}

/// CLI arguments for cybergavel
#[derive(Parser, Debug)]
#[command(name = "cybergavel")]
#[command(author, version, about = "CyberGavel - a multi-model mock courtroom")]
#[command(long_about = r#"
CyberGavel puts a disputed topic on trial before a panel of LLMs.

The proceeding has three phases:
1. Debate: plaintiff's and defendant's counsel argue in alternating rounds
2. Jury: each juror persona comments on the debate and casts a vote
3. Verdict: the judge weighs the record and the jury and rules

Every role can be bound to a different backend model. Credentials are read
from the environment variables named in the model registry (--list-models).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./gavel.toml        Project-level config
3. ~/.config/cybergavel/config.toml   Global config

Example:
  cybergavel "Should engineers be on call for their own bugs?"
  cybergavel --rounds 3 --judge DeepSeek-Chat --plaintiff Qwen-Plus "Tabs or spaces?"
  cybergavel --save verdict.html "Is estimating in story points worth it?"
"#)]
pub struct Cli {
    /// The disputed topic to put on trial
    pub topic: Option<String>,

    /// Number of debate rounds (clamped to 1..=4)
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Model label for the judge
    #[arg(long, value_name = "MODEL")]
    pub judge: Option<String>,

    /// Model label for plaintiff's counsel
    #[arg(long, value_name = "MODEL")]
    pub plaintiff: Option<String>,

    /// Model label for defendant's counsel
    #[arg(long, value_name = "MODEL")]
    pub defendant: Option<String>,

    /// Model label for the jury (applies to every juror)
    #[arg(long, value_name = "MODEL")]
    pub juror: Option<String>,

    /// List the configured model labels and exit
    #[arg(long)]
    pub list_models: bool,

    /// Write the verdict as a standalone HTML document
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_role_selections() {
        let cli = Cli::parse_from([
            "cybergavel",
            "--rounds",
            "3",
            "--judge",
            "DeepSeek-Chat",
            "--juror",
            "Qwen-Turbo",
            "Tabs or spaces?",
        ]);
        assert_eq!(cli.topic.as_deref(), Some("Tabs or spaces?"));
        assert_eq!(cli.rounds, Some(3));
        assert_eq!(cli.judge.as_deref(), Some("DeepSeek-Chat"));
        assert_eq!(cli.juror.as_deref(), Some("Qwen-Turbo"));
        assert!(!cli.list_models);
    }

    #[test]
    fn test_list_models_needs_no_topic() {
        let cli = Cli::parse_from(["cybergavel", "--list-models"]);
        assert!(cli.list_models);
        assert!(cli.topic.is_none());
    }
}
