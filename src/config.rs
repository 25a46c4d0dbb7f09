use crate::cli_args::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Final resolved configuration for commitgen.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub model: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-key`)
    ///   2. Env vars `COMMITGEN_MODEL` / `GEMINI_API_KEY`
    ///   3. TOML `~/.config/commitgen.toml`
    ///   4. Hardcoded default model ("gemini-pro")
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("COMMITGEN_MODEL").ok())
            .or(file_cfg.model)
            .unwrap_or_else(|| "gemini-pro".to_string());

        // clap already consulted GEMINI_API_KEY when resolving --api-key.
        let gemini_api_key = cli.api_key.clone().or(file_cfg.gemini_api_key);

        Config { gemini_api_key, model }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub gemini_api_key: Option<String>,
}

/// Return `~/.config/commitgen.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commitgen.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
