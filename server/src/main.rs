use std::future;

use anyhow::Context;
use log::{info, warn};
use tokio::{net::TcpListener, signal};

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let addr = config.addr();

    let list = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening at {addr}");

    server::serve(list, server::router(&config), shutdown_signal()).await?;
    info!("wrapping up, shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("received SIGINT"),
        Err(e) => {
            warn!("failed to listen for shutdown signal: {e}");
            future::pending::<()>().await;
        }
    }
}
