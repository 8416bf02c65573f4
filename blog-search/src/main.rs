//! Blog Search Entry Point
//!
//! Command-line client that indexes, fetches and searches blog articles in OpenSearch.

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blog_search::cli::Cli;
use blog_search::commands::handle_command;
use blog_search::config::LogFormat;
use blog_search::{AppConfig, AppError, Dependencies};

/// Initialize tracing/logging. Logs are written to stderr.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("blog_search=info,blog_search_repository=info"));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    // Tracing first so configuration warnings are not lost
    init_tracing(LogFormat::from_env());
    let config = AppConfig::from_env();

    info!(
        service_name = "blog-search",
        service_version = env!("CARGO_PKG_VERSION"),
        "Starting blog search client"
    );

    let deps = match Dependencies::new(&config).await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = handle_command(&deps.service, cli.command, &mut stdout).await {
        error!(error = %e, "Command failed");
        return Err(e);
    }

    Ok(())
}
