//! Main entry point for the rockfall dashboard API server

use clap::Parser;
use rockfall_api::build_router;
use rockfall_core::context_error::{Result, ResultExt};
use rockfall_core::{Config, context_error, init_logging};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Command line interface for the rockfall dashboard server
#[derive(Debug, Parser)]
#[command(
    name = "rockfall-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "HTTP server for the AI rockfall prediction dashboard"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    // An explicit --config must load; otherwise fall back to defaults
    let (mut config, load_error) = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_none() => (Config::default(), Some(e)),
        Err(e) => return Err(e.into()),
    };

    init_logging(&config.logging)?;

    if let Some(e) = load_error {
        info!("Failed to load config ({}), using defaults", e);
    }

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.analysis.backend,
        delay_ms = config.analysis.delay_ms,
        "Starting rockfall dashboard server"
    );

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| context_error!("Invalid server address: {}", e))?;

    let app = build_router(config)?.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("API:    http://{}/api", addr);
    info!("Health: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| error!("Server error: {}", e))
        .with_context(|| "Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
///
/// A signal handler that cannot be installed never fires; the other one still
/// does.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
