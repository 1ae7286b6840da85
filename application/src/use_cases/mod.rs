//! Application use cases

pub mod run_trial;
