//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! # Example
//!
//! ```toml
//! [trial]
//! rounds = 2
//!
//! [roles]
//! judge = "DeepSeek-Chat"
//! plaintiff = "Qwen-Plus"
//! defendant = "Kimi-K2-Turbo-Preview"
//! juror = "Qwen-Turbo"
//!
//! [roles.jurors]
//! skeptic = "GLM-4.6"
//!
//! [[models]]
//! label = "Local-Llama"
//! credential_key = "LOCAL_API_KEY"
//! endpoint_url = "http://localhost:8080/v1"
//! model_id = "llama-3.1-8b"
//! ```

use gavel_domain::{ModelDescriptor, ModelRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Extra registry entries, merged over the built-in table
    pub models: Vec<FileModelEntry>,
    /// Default model labels per role
    pub roles: FileRolesConfig,
    /// Trial behavior settings
    pub trial: FileTrialConfig,
}

impl FileConfig {
    /// Assemble the process-wide registry: built-in table plus config
    /// entries, config entries replacing built-ins with the same label.
    pub fn registry(&self) -> ModelRegistry {
        let mut registry = ModelRegistry::builtin();
        for entry in &self.models {
            registry.insert(entry.to_descriptor());
        }
        registry
    }
}

/// One `[[models]]` registry entry from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileModelEntry {
    pub label: String,
    pub credential_key: String,
    pub endpoint_url: String,
    pub model_id: String,
}

impl FileModelEntry {
    pub fn to_descriptor(&self) -> ModelDescriptor {
        ModelDescriptor::new(
            &self.label,
            &self.credential_key,
            &self.endpoint_url,
            &self.model_id,
        )
    }
}

/// Default model labels per role (`[roles]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRolesConfig {
    pub judge: Option<String>,
    pub plaintiff: Option<String>,
    pub defendant: Option<String>,
    /// Default label for every juror
    pub juror: Option<String>,
    /// Per-persona overrides, keyed by persona id
    pub jurors: HashMap<String, String>,
}

/// Trial behavior settings (`[trial]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrialConfig {
    /// Default number of debate rounds
    pub rounds: u32,
}

impl Default for FileTrialConfig {
    fn default() -> Self {
        Self { rounds: 2 }
    }
}
