use anyhow::Context;
use clap::Parser;
use gh_client::{OctocrabClient, TokenResolver};
use gh_notification_sweep::{cli::Cli, logger, sweep, PipelineConfig, SweepReport};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init();

    match run(cli.into_config()).await {
        Ok(report) => {
            report.log_summary();
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: PipelineConfig) -> anyhow::Result<SweepReport> {
    // Load .env file if GITHUB_TOKEN not set
    if std::env::var("GITHUB_TOKEN").is_err() {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
            Err(_) => log::debug!(".env file not found, will rely on environment variables"),
        }
    }

    let token = TokenResolver::new()
        .get_token(None)
        .await
        .context("failed to obtain GitHub token")?;
    let client = OctocrabClient::connect(token, None)?;

    if config.dry_run {
        log::info!("Dry run: no notification will be marked as done");
    }

    sweep(Arc::new(client), config).await
}
