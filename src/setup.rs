use anyhow::{anyhow, Result};
use log::debug;

use crate::config::Config;
use crate::llm::gemini::GeminiMsgGenerator;
use crate::llm::noop::NoopGenerator;
use crate::llm::MsgGenerator;

/// Build the message generator based on CLI + config.
pub fn build_generator(cfg: &Config, no_model: bool) -> Result<Box<dyn MsgGenerator>> {
    let use_no_model = no_model || cfg.model.eq_ignore_ascii_case("none");

    if use_no_model {
        debug!("Using NoopGenerator (no model calls)");
        return Ok(Box::new(NoopGenerator));
    }

    let key = cfg.gemini_api_key.clone().ok_or_else(|| {
        anyhow!("GEMINI_API_KEY (or --api-key) is required unless --no-model or model=none is used")
    })?;

    debug!("Using GeminiMsgGenerator with model: {}", cfg.model);

    Ok(Box::new(GeminiMsgGenerator::new(key, cfg.model.clone())))
}
