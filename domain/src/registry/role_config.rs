//! Resolved per-role model configuration

use crate::core::error::RegistryError;
use serde::{Deserialize, Serialize};

/// Resolved connection parameters for invoking a backend on behalf of a role.
///
/// Produced by [`crate::registry::ModelRegistry::resolve`]. The credential
/// may be absent at this point; a config with no credential is unusable and
/// must cause trial setup to abort via [`RoleConfig::require_usable`] before
/// the debate phase begins — never silently skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Registry label, used for display and inline error messages.
    pub label: String,
    /// API key, if the environment provided one.
    pub credential: Option<String>,
    /// Name of the environment variable the credential is read from.
    pub credential_key: String,
    /// OpenAI-compatible base URL.
    pub endpoint_url: String,
    /// Model identifier understood by the endpoint.
    pub model_id: String,
}

impl RoleConfig {
    /// Fail with a precise missing-credential message if the config is
    /// unusable; otherwise return it unchanged.
    pub fn require_usable(self) -> Result<Self, RegistryError> {
        if self.credential.is_none() {
            return Err(RegistryError::MissingCredential {
                label: self.label,
                credential_key: self.credential_key,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(credential: Option<&str>) -> RoleConfig {
        RoleConfig {
            label: "Qwen-Plus".to_string(),
            credential: credential.map(str::to_string),
            credential_key: "DASHSCOPE_API_KEY".to_string(),
            endpoint_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".to_string(),
            model_id: "qwen-plus".to_string(),
        }
    }

    #[test]
    fn test_require_usable_passes_with_credential() {
        let usable = config(Some("sk-test")).require_usable().unwrap();
        assert_eq!(usable.credential.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_require_usable_names_the_missing_key() {
        let err = config(None).require_usable().unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingCredential {
                label: "Qwen-Plus".to_string(),
                credential_key: "DASHSCOPE_API_KEY".to_string(),
            }
        );
        assert!(err.to_string().contains("DASHSCOPE_API_KEY"));
    }
}
