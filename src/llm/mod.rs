pub mod gemini;
pub mod noop;
mod prompt_builder;
mod prompts;

use anyhow::Result;

/// Trait for turning a staged diff into a commit message.
pub trait MsgGenerator: Send + Sync {
    /// Generate a commit message for the given staged diff.
    ///
    /// `delimiter` controls how newlines in the model output are collapsed;
    /// `None` keeps single newlines.
    fn generate(&self, diff: &str, delimiter: Option<&str>) -> Result<String>;
}
