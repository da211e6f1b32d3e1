//! SSM Loader - Main Application Entry Point
//!
//! Resolves `SSM_LOAD_*` declarations against AWS Systems Manager Parameter
//! Store and writes the values to a JSON file for another process.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::Environment;
use std::env;
use std::path::{Path, PathBuf};
use store_client::SsmParameterStore;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;

use app::RunOutcome;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ssm-loader", version, about)]
struct Cli {
    /// Load environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Log output format, falls back to LOG_FORMAT
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load the env file before anything reads the environment
    let env_file = load_env_file(cli.env_file.as_deref());

    init_logging(cli.log_format)?;

    match env_file? {
        Some(path) => info!("Loaded environment variables from {}", path.display()),
        None => info!("No .env file found, using process environment"),
    }

    info!("Starting SSM Loader v{}", env!("CARGO_PKG_VERSION"));

    let env = Environment::capture();
    match app::run(&env, SsmParameterStore::from_env).await {
        Ok(RunOutcome::NothingToDo) => {}
        Ok(RunOutcome::Written { path, count }) => {
            info!(path = %path.display(), count, "Configuration file written");
        }
        Err(e) => {
            error!("SSM loader failed: {}", e);
            return Err(e).context("SSM loader failed");
        }
    }

    Ok(())
}

/// Load variables from `path`, or from `./.env` when no path is given
///
/// An explicit file must exist, a missing `./.env` is skipped. Variables
/// already present in the process win over the file.
fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenv::from_path(path)
                .with_context(|| format!("Could not load env file {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenv::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e).context("Could not load .env file"),
        },
    }
}

/// Initialize logging based on flags and environment variables
fn init_logging(format: Option<LogFormat>) -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = format.unwrap_or_else(|| match env::var("LOG_FORMAT").as_deref() {
        Ok("pretty") => LogFormat::Pretty,
        _ => LogFormat::Json,
    });

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        LogFormat::Pretty => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    info!("Logging initialized");
    info!("Log level: {}", log_level);
    info!("Log format: {:?}", log_format);

    Ok(())
}
