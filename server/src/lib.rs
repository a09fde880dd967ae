//! HTTP front end for elementwise vector arithmetic.
pub mod config;
pub mod error;
pub mod handlers;
pub mod payload;
pub mod validate;

use std::io;

use axum::{Router, extract::DefaultBodyLimit, routing::any};
use tokio::net::TcpListener;

pub use config::{ConfigErr, ServerConfig};
pub use error::ApiErr;

/// Builds the service's routes.
///
/// Everything under `/vector/` is a calculation, every other path is the
/// health check.
///
/// # Arguments
/// * `config` - The server configuration.
///
/// # Returns
/// A router ready to be served.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/vector", any(handlers::calculate))
        .route("/vector/", any(handlers::calculate))
        .route("/vector/*rest", any(handlers::calculate))
        .fallback(handlers::health_check)
        .layer(DefaultBodyLimit::max(config.body_limit()))
}

/// Serves `app` on `listener` until `shutdown` resolves, then waits for
/// in-flight requests to finish.
///
/// # Arguments
/// * `listener` - A bound listener.
/// * `app` - The routes to serve.
/// * `shutdown` - Resolves when the server should stop accepting connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
