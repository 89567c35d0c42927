//! HTTP server.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use kinship_client::PeopleSource;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::routes::{AppState, router};
use crate::{Error, Result};

/// Listen address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port; 0 picks a free one
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Kinship web server
pub struct Server {
    config: ServerConfig,
    source: Arc<dyn PeopleSource>,
}

impl Server {
    /// Creates a server reading records from `source`.
    pub fn new(config: ServerConfig, source: Arc<dyn PeopleSource>) -> Self {
        Self { config, source }
    }

    /// The configured listen address.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Application router with request tracing.
    pub fn router(&self) -> Router {
        router(AppState::new(self.source.clone())).layer(TraceLayer::new_for_http())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?;
        tracing::info!(
            addr = %local,
            source = %self.source.describe(),
            "Kinship server listening"
        );
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Kinship server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
