//! Folio server
//!
//! Serves the portfolio pages and the public directory on HOST:PORT

use anyhow::Context;
use folio_core::logging_facility::init;
use folio_server::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Server failed to start: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    init(config.log_profile);

    let app = folio_server::app(&config)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        profile = ?config.log_profile,
        public_dir = %config.public_dir.display(),
        "HTTP server ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped with an error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
