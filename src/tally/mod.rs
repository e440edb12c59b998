//! Answer tallying: per-prompt answer collection and the prompt bank.

pub mod bank;
pub mod prompt;

pub use bank::{PromptBank, DEFAULT_PROMPTS};
pub use prompt::PromptTally;
