use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

mod cli_args;
mod config;
mod git;
mod llm;
mod logging;
mod setup;
mod text;

use cli_args::Cli;
use config::Config;
use llm::MsgGenerator;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let cfg = Config::from_sources(&cli);
    let generator = setup::build_generator(&cfg, cli.no_model)?;

    run(&cli, generator.as_ref())
}

/// One-shot commit message from the entire staged diff.
fn run(cli: &Cli, generator: &dyn MsgGenerator) -> Result<()> {
    let diff = git::staged_diff()?;

    if diff.trim().is_empty() {
        println!("No staged changes found.");
        return Ok(());
    }

    let spinner = start_spinner();
    let result = generator.generate(&diff, cli.delimiter.as_deref());
    spinner.finish_and_clear();

    let commit_message = result?;

    println!();
    println!("----- Commit Message Preview -----");
    println!("{commit_message}");
    println!("----------------------------------");

    if cli.apply {
        git::write_commit_editmsg(&commit_message)?;
        println!("Wrote message to .git/COMMIT_EDITMSG");
    }

    Ok(())
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈")
            .template("{spinner} Generating commit message...")
            .expect("spinner template is valid"),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
