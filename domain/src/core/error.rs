//! Domain error types

use thiserror::Error;

/// Errors raised while resolving role model configurations.
///
/// Both variants are fatal to trial setup: they surface before any
/// network call is made. Per-call remote failures are deliberately NOT
/// represented here — those are folded into the transcript as inline
/// text by the orchestrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Model '{label}' has no API key. Set the {credential_key} environment variable.")]
    MissingCredential { label: String, credential_key: String },
}

impl RegistryError {
    /// Check whether this error names a missing credential.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, RegistryError::MissingCredential { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_display() {
        let error = RegistryError::UnknownModel("gpt-unknown".to_string());
        assert_eq!(error.to_string(), "Unknown model: gpt-unknown");
    }

    #[test]
    fn test_missing_credential_names_the_variable() {
        let error = RegistryError::MissingCredential {
            label: "DeepSeek-Chat".to_string(),
            credential_key: "DEEPSEEK_API_KEY".to_string(),
        };
        assert!(error.to_string().contains("DEEPSEEK_API_KEY"));
        assert!(error.to_string().contains("DeepSeek-Chat"));
        assert!(error.is_missing_credential());
    }
}
