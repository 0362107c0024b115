//! TLS server harness implementation.

use std::sync::Arc;

use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handlers::AppState;
use crate::routes::create_router;

/// TLS server harness.
///
/// Loads the two PEM artifacts produced by issuance (a `CERTIFICATE` block
/// and a SEC1 `EC PRIVATE KEY` block) and terminates TLS for the three test
/// endpoints.
#[derive(Debug, Clone)]
pub struct HarnessServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HarnessServer {
    /// Create a new harness server with the given configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState {
            upload_dir: config.upload_dir.clone(),
        });
        Self { config, state }
    }

    /// Create the router without starting the server.
    ///
    /// Useful for testing or embedding in another server.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone())
    }

    /// Start the TLS listener and serve until a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS material cannot be loaded or the listener
    /// fails.
    pub async fn serve(&self) -> ServerResult<()> {
        self.serve_with_handle(Handle::new()).await
    }

    /// Start the TLS listener with an external handle.
    ///
    /// The handle exposes the bound address (useful with port 0) and allows
    /// graceful shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS material cannot be loaded or the listener
    /// fails.
    pub async fn serve_with_handle(&self, handle: Handle) -> ServerResult<()> {
        let tls = RustlsConfig::from_pem_file(&self.config.cert_path, &self.config.key_path)
            .await
            .map_err(|source| ServerError::TlsConfig {
                cert: self.config.cert_path.clone(),
                key: self.config.key_path.clone(),
                source,
            })?;

        info!(addr = %self.config.bind_addr, "TLS harness listening");

        axum_server::bind_rustls(self.config.bind_addr, tls)
            .handle(handle)
            .serve(self.router().into_make_service())
            .await
            .map_err(|e| ServerError::Serve(self.config.bind_addr, e))?;

        info!("TLS harness shut down");
        Ok(())
    }
}
