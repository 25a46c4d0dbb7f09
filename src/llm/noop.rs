use anyhow::Result;

use super::MsgGenerator;
use crate::text;

/// Dummy generator for --no-model runs; answers without any network call.
pub struct NoopGenerator;

impl MsgGenerator for NoopGenerator {
    fn generate(&self, diff: &str, delimiter: Option<&str>) -> Result<String> {
        let message = format!(
            "Dummy commit message for testing\n\n(model calls disabled; staged diff was {} bytes)",
            diff.len()
        );
        Ok(text::trim_new_lines(&message, delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_offline_with_collapsed_newlines() {
        let message = NoopGenerator.generate("diff --git a/x b/x", None).unwrap();
        assert!(message.contains("18 bytes"));
        assert!(!message.contains("\n\n"));
    }
}
