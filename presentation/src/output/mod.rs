//! Output formatting: console display and the verdict document export.

pub mod console;
pub mod formatter;
pub mod html;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;
