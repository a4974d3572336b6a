//! `bizdays-server`: business-day and settlement-date HTTP API.
//!
//! ```bash
//! bizdays-server --port 8080 -vv
//! BIZDAYS_ENV=production bizdays-server
//! bizdays-server --print-config
//! ```

use anyhow::{Context, Result};
use bd_server::{create_router, telemetry, ServerConfig};
use clap::Parser;

/// Business-day checks and settlement-date calculation over HTTP
#[derive(Parser, Debug)]
#[command(name = "bizdays-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Interface override (overrides BIZDAYS_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port override (overrides BIZDAYS_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config: defaults -> env (BIZDAYS_*) -> CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    telemetry::init_logging(cli.verbose, config.environment)?;
    tracing::info!(
        environment = %config.environment,
        default_country = %config.default_country,
        "starting bizdays server"
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        "listening on http://{}{}",
        listener.local_addr()?,
        config.api_prefix
    );

    axum::serve(listener, create_router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
