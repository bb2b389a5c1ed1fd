// wire2html - Wireframe screenshot to Tailwind HTML conversion proxy

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};
use wire2html::cli::Args;
use wire2html::config::AppConfig;
use wire2html::openai::OpenAiClient;
use wire2html::server::{create_router, TO_HTML_PATH};
use wire2html::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting wire2html v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build upstream client
    let openai_client = OpenAiClient::new(&config.openai, &config.logging)?;
    if !openai_client.has_api_key() {
        warn!("OPENAI_API_KEY is not set; conversions will fail until it is configured");
    }
    info!(
        "Forwarding conversions to {} (model: {})",
        openai_client.endpoint(),
        openai_client.model()
    );

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, openai_client);

    info!("Listening on {} (POST {})", addr, TO_HTML_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
