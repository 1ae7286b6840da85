//! Prompt construction for every stage of the trial.

pub mod template;

pub use template::PromptTemplate;
