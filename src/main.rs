use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use restock_clerk::cli::Cli;
use restock_clerk::config::{Credentials, RunConfig};
use restock_clerk::core::{AcquisitionLoop, LoopSettings, Termination, interrupted, run_self_test};
use restock_clerk::plugins::NotifierSet;
use restock_clerk::utils::http::build_client;
use restock_clerk::vendor::BrowserSession;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = match init_tracing(cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(termination) => ExitCode::from(termination.exit_code()),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::from_default_env().add_directive("restock_clerk=info".parse()?);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "restock-clerk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run(cli: Cli) -> Result<Termination> {
    info!("Starting Restock Clerk...");

    let credentials = Credentials::load(&cli.credentials).context("Failed to load credentials")?;
    let config = RunConfig::resolve(&cli.resolve_request(), &credentials)
        .context("Invalid configuration")?;
    info!(
        "Region {} ({}, {}), target SKU {}",
        config.region, config.locale, config.currency, config.sku
    );

    let client = build_client().context("Failed to build HTTP client")?;
    let notifiers = NotifierSet::from_config(&config, &client);
    if notifiers.is_empty() {
        warn!("No notification channels enabled");
    } else {
        info!("Notifying via {:?}", notifiers.channels());
    }

    if cli.test {
        info!(
            "Testing {} notification channel(s) with SKU {}",
            notifiers.len(),
            config.test_sku
        );
        let report = run_self_test(&notifiers, &config.test_sku, cli.self_test_policy.into()).await;
        if let Some(termination) = Termination::from_self_test(&report) {
            if let Some(channel) = report.aborted_at {
                error!("Self-test stopped at {}", channel.label());
            }
            error!("Testing failed with errors, exiting...");
            return Ok(termination);
        }
        info!("Self-test passed for {:?}", report.tested());
    }

    let session = BrowserSession::start(&config.browser, &config.locale)
        .await
        .context("Failed to start store session")?;
    let acquisition = AcquisitionLoop::new(session, notifiers, LoopSettings::from_config(&config));

    tokio::select! {
        result = acquisition.run() => {
            info!(
                "Done: product {} after {} cycle(s), {} retried",
                result.product_id, result.cycles, result.retries
            );
            Ok(Termination::Done(result))
        }
        _ = interrupted(tokio::signal::ctrl_c()) => {
            info!("Shutting down...");
            Ok(Termination::Interrupted)
        }
    }
}
