//! Environment-backed credential source

use gavel_domain::CredentialSource;

/// Reads credentials from process environment variables, named exactly as
/// given in the model registry table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for EnvCredentialSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}
