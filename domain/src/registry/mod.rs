//! Model registry and role configuration resolution.
//!
//! The registry is a fixed, insertion-ordered table mapping a human-readable
//! model label to connection parameters. It is built once at startup (the
//! built-in table, optionally extended from the config file) and never
//! mutated afterwards.
//!
//! Resolution happens in two steps so a misconfiguration surfaces with a
//! precise message before any network call:
//!
//! 1. [`ModelRegistry::resolve`] — label → [`RoleConfig`]. Unknown labels
//!    fail here; a missing credential does NOT (it is recorded as `None`).
//! 2. [`RoleConfig::require_usable`] — fails if the credential is absent,
//!    naming the environment variable to set.

pub mod descriptor;
pub mod role_config;

pub use descriptor::ModelDescriptor;
pub use role_config::RoleConfig;

use crate::core::error::RegistryError;

/// Source of credentials, looked up by the descriptor's credential key.
///
/// The production implementation reads process environment variables;
/// tests substitute an in-memory map.
pub trait CredentialSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Insertion-ordered, read-only table of model descriptors.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    entries: Vec<ModelDescriptor>,
}

impl ModelRegistry {
    /// Empty registry. Mostly useful in tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in model table.
    pub fn builtin() -> Self {
        Self {
            entries: ModelDescriptor::builtin(),
        }
    }

    /// Insert a descriptor. Re-inserting an existing label replaces the
    /// descriptor in place, keeping its position in the listing order.
    pub fn insert(&mut self, descriptor: ModelDescriptor) {
        match self.entries.iter_mut().find(|d| d.label == descriptor.label) {
            Some(existing) => *existing = descriptor,
            None => self.entries.push(descriptor),
        }
    }

    /// All configured labels, in stable listing order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.label.as_str()).collect()
    }

    /// Look up a descriptor by label.
    pub fn get(&self, label: &str) -> Option<&ModelDescriptor> {
        self.entries.iter().find(|d| d.label == label)
    }

    /// Resolve a label into a [`RoleConfig`], retrieving the credential
    /// from `credentials`. Credential absence is recorded in the result,
    /// not an error here — the caller decides when to fail via
    /// [`RoleConfig::require_usable`].
    pub fn resolve(
        &self,
        label: &str,
        credentials: &dyn CredentialSource,
    ) -> Result<RoleConfig, RegistryError> {
        let descriptor = self
            .get(label)
            .ok_or_else(|| RegistryError::UnknownModel(label.to_string()))?;

        Ok(RoleConfig {
            label: descriptor.label.clone(),
            credential: credentials.get(&descriptor.credential_key),
            credential_key: descriptor.credential_key.clone(),
            endpoint_url: descriptor.endpoint_url.clone(),
            model_id: descriptor.model_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) struct MapCredentials(pub HashMap<String, String>);

    impl CredentialSource for MapCredentials {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    fn creds(pairs: &[(&str, &str)]) -> MapCredentials {
        MapCredentials(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_builtin_labels_are_stable() {
        let registry = ModelRegistry::builtin();
        let labels = registry.labels();
        assert_eq!(labels.first(), Some(&"DeepSeek-Chat"));
        assert!(labels.contains(&"GLM-4.6"));
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_resolve_unknown_label_fails() {
        let registry = ModelRegistry::builtin();
        let err = registry
            .resolve("No-Such-Model", &creds(&[]))
            .unwrap_err();
        assert_eq!(err, RegistryError::UnknownModel("No-Such-Model".to_string()));
    }

    #[test]
    fn test_resolve_records_missing_credential_without_failing() {
        let registry = ModelRegistry::builtin();
        let config = registry.resolve("DeepSeek-Chat", &creds(&[])).unwrap();
        assert!(config.credential.is_none());
        assert_eq!(config.credential_key, "DEEPSEEK_API_KEY");
    }

    #[test]
    fn test_resolve_picks_up_credential() {
        let registry = ModelRegistry::builtin();
        let config = registry
            .resolve("DeepSeek-Chat", &creds(&[("DEEPSEEK_API_KEY", "sk-test")]))
            .unwrap();
        assert_eq!(config.credential.as_deref(), Some("sk-test"));
        assert_eq!(config.model_id, "deepseek-chat");
        assert_eq!(config.endpoint_url, "https://api.deepseek.com");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut registry = ModelRegistry::builtin();
        let position = registry.labels().iter().position(|l| *l == "GLM-4.6");
        registry.insert(ModelDescriptor::new(
            "GLM-4.6",
            "ZHIPU_API_KEY",
            "https://example.com/v4",
            "glm-4.6-turbo",
        ));
        assert_eq!(
            registry.labels().iter().position(|l| *l == "GLM-4.6"),
            position
        );
        assert_eq!(registry.get("GLM-4.6").unwrap().model_id, "glm-4.6-turbo");
        assert_eq!(registry.labels().len(), 5);
    }
}
