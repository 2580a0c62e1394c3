//! CLI entrypoint for stitch-invoke
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use stitch_application::{
    CommandDispatcher, InvocationProgress, InvokeError, InvokeToolUseCase, NoInvocationProgress,
};
use stitch_infrastructure::{AmbientCredentialProvider, ConfigLoader, HttpToolTransport};
use stitch_presentation::{Cli, ConsoleFormatter, EXIT_CONFIG, EXIT_USAGE, SpinnerProgress, report};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(0);
    }

    let Some(command) = cli.command.as_deref() else {
        eprintln!("{}", ConsoleFormatter::usage());
        return Ok(EXIT_USAGE);
    };

    // Usage errors are reported before configuration is even read
    let call = match CommandDispatcher::prepare(command, &cli.args) {
        Ok(call) => call,
        Err(e) => return Ok(report(&Err(InvokeError::from(e)))),
    };

    info!("Starting stitch-invoke");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;
    debug!(?config, "Loaded configuration");

    // === Dependency Injection ===
    let credentials = Arc::new(
        AmbientCredentialProvider::from_config(&config.auth)
            .context("failed to set up credential provider")?,
    );
    let transport = Arc::new(
        HttpToolTransport::from_config(&config.service).context("failed to set up transport")?,
    );
    let dispatcher = CommandDispatcher::new(InvokeToolUseCase::new(credentials, transport));

    let progress: Box<dyn InvocationProgress> = if cli.quiet {
        Box::new(NoInvocationProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    let outcome = dispatcher.run(call, progress.as_ref()).await;
    drop(progress);

    Ok(report(&outcome))
}
