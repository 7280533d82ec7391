use anyhow::{Context, Result};
use clap::Parser;
use discovery_client::{
    handler::{AppRouter, Cli},
    state::AppState,
};
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = Config::init()
        .and_then(|config| config.with_overrides(cli.api_url.as_deref(), cli.session_file))
        .context("Failed to load configuration")?;

    let _guard = init_logger(&config.log_dir, "discovery")?;

    let state = AppState::new(config).context("Failed to create AppState")?;

    info!("Running `{}`", cli.command.name());
    let output = AppRouter::dispatch(&state, cli.command).await;

    if output.ok {
        print!("{}", output.screen);
    } else {
        error!("Command failed");
        eprint!("{}", output.screen);
    }

    Ok(output.ok)
}
