use crate::shared::error::NavigatorError;
use crate::shared::Result;
use axum::Router;
use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// NavigationServer - loopback HTTP listener for the navigator
///
/// Binding and serving are separate steps so the caller can open the
/// browser once the port is known to be taken.
pub struct NavigationServer {
    listener: TcpListener,
    address: SocketAddr,
}

impl NavigationServer {
    /// Binds `127.0.0.1:<port>`; port 0 picks a free port
    ///
    /// # Errors
    /// Returns `NavigatorError::BindError` if the address is unavailable
    pub async fn bind(port: u16) -> Result<Self> {
        let requested = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
        let listener = TcpListener::bind(requested)
            .await
            .map_err(|e| NavigatorError::BindError {
                address: requested.to_string(),
                details: e.to_string(),
            })?;
        let address = listener
            .local_addr()
            .map_err(|e| NavigatorError::BindError {
                address: requested.to_string(),
                details: e.to_string(),
            })?;

        Ok(Self { listener, address })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.address
    }

    /// URL to open in the browser
    pub fn url(&self) -> String {
        format!("http://localhost:{}/", self.address.port())
    }

    /// Serves until `shutdown` completes
    pub async fn serve_until<S>(self, app: Router, shutdown: S) -> Result<()>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(address = %self.address, "navigator listening");
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("navigator stopped");
        Ok(())
    }

    /// Serves until Ctrl-C
    pub async fn serve(self, app: Router) -> Result<()> {
        self.serve_until(app, shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
}
