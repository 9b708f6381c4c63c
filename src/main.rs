use anyhow::Context;
use clap::Parser;
use imageswap_webhook::{
    cli::Cli,
    config::{self, Config},
    serve, shutdown,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration from environment")?;

    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!(
        graceful_timeout = ?cli.graceful_timeout,
        "Starting ImageSwap webhook server"
    );

    let controller = shutdown::ShutdownController::new();
    let signals = shutdown::signal_listener(controller.clone())
        .context("failed to install signal handlers")?;
    tokio::spawn(signals);

    let handle = axum_server::Handle::new();
    let drain_handle = handle.clone();
    let drain_controller = controller.clone();
    let grace = cli.graceful_timeout;

    tokio::spawn(async move {
        drain_controller.cancelled().await;

        info!(grace_period = ?grace, "Shutdown signal received. Draining connections");

        drain_handle.graceful_shutdown(Some(grace));
    });

    let (server_future, addr) = serve(config::LISTEN_ADDR, handle)
        .await
        .context("failed to start server")?;

    info!("Server running on {}", addr);

    server_future.await.context("server failed to run")?;

    info!("Shutting down");
    Ok(())
}
