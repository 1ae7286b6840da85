//! Configuration file support
//!
//! TOML config files can extend the built-in model registry and set
//! default role selections and the default round count.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileModelEntry, FileRolesConfig, FileTrialConfig};
pub use loader::ConfigLoader;
