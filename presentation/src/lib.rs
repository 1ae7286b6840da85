//! Presentation layer for cybergavel
//!
//! This crate contains the CLI definition, console output formatting,
//! progress reporting, and the standalone verdict document export.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{console::ConsoleFormatter, html::verdict_document};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
