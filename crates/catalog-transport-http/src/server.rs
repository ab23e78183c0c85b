//! HTTP server that binds an axum Router to a TCP socket.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use catalog_config::EmptyFilterPolicy;
use catalog_registry::ItemRepository;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the catalog API.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `repo` - shared item store
    /// * `addr` - socket address to listen on
    /// * `empty_filter` - status policy for filter routes with no match
    pub fn new(
        repo: Arc<dyn ItemRepository>,
        addr: SocketAddr,
        empty_filter: EmptyFilterPolicy,
    ) -> Self {
        Self {
            addr,
            state: AppState { repo, empty_filter },
        }
    }

    /// Starts the server and runs until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener =
            TcpListener::bind(self.addr)
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr.to_string(),
                    source: e,
                })?;

        tracing::info!(addr = %self.addr, policy = ?self.state.empty_filter, "catalog HTTP server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        Ok(())
    }
}
