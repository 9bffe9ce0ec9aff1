use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    bikedex::logging::init().context("init logging")?;

    let cli = bikedex::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        bikedex::cli::Command::Scrape(args) => {
            bikedex::scrape::run(args).await.context("scrape")?;
        }
        bikedex::cli::Command::Classify(args) => {
            bikedex::classify::run(args).context("classify")?;
        }
    }

    Ok(())
}
