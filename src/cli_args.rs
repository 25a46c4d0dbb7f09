use clap::{ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "commitgen",
    version,
    about = "Gemini-assisted Git commit message generator"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// If set, write the generated message into .git/COMMIT_EDITMSG (no commit is created)
    #[arg(long)]
    pub apply: bool,

    /// Model name to use (e.g. gemini-pro). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; return a dummy message instead
    #[arg(long)]
    pub no_model: bool,

    /// API key (otherwise uses GEMINI_API_KEY env var)
    #[arg(long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    /// Delimiter used when collapsing newlines in the generated message
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
