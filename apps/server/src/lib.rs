//! # GiveHub Server
//!
//! The donation gateway's HTTP surface: feature slices are initialized from
//! configuration, folded into the shared [`ApiState`], and served over HTTP
//! or HTTPS with graceful shutdown.
//!
//! ```no_run
//! use ghub_server::Server;
//!
//! # async fn example() -> anyhow::Result<()> {
//! Server::builder().port(4680).build().await?.run().await
//! # }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum_server::Handle;
use ghub::domain::config::{ApiConfig, ServerConfig};
use ghub::kernel::server::ApiState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// Window granted to in-flight requests once a shutdown signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Configures a [`Server`] before feature slices are brought up.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    /// Replaces the whole configuration, usually fresh from `load_config`.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides the listening port.
    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Initializes every feature slice and assembles the shared state.
    ///
    /// TLS material is checked up front so a bad certificate path fails the
    /// boot instead of the first request.
    ///
    /// # Errors
    ///
    /// Fails when the TLS files are missing, a slice rejects its
    /// configuration (an invalid site list, most commonly), or state
    /// assembly fails.
    pub async fn build(self) -> Result<Server> {
        check_tls_material(&self.cfg.server)?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, "Initializing server");

        let slices = ghub::init(&self.cfg).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;
        let state = ApiState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Finalizing the slice registry")?;

        Ok(Server { state })
    }
}

/// Rejects missing TLS files and flags world-readable private keys.
fn check_tls_material(server: &ServerConfig) -> Result<()> {
    let Some(ssl) = &server.ssl else {
        return Ok(());
    };

    if !ssl.cert.exists() {
        anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
    }
    if !ssl.key.exists() {
        anyhow::bail!("SSL key not found at: {}", ssl.key.display());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            tracing::warn!(
                "SECURITY: SSL private key {} is readable by other users (expected mode 600)",
                ssl.key.display()
            );
        }
    }

    Ok(())
}

/// A server with its state assembled, waiting for [`Server::run`].
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves requests until Ctrl+C or SIGTERM, then drains connections.
    ///
    /// # Errors
    ///
    /// Fails when the address cannot be bound or the TLS files do not parse.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let app = router::init(self.state).into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        match &cfg.server.ssl {
            Some(ssl) => {
                info!("Listening on https://{address}");
                let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Loading TLS certificate and key")?;
                axum_server::bind_rustls(address, tls)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTPS server failed")?;
            }
            None => {
                info!("Listening on http://{address}");
                axum_server::bind(address)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTP server failed")?;
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// The assembled application state; handy for tests.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Waits for Ctrl+C or SIGTERM and starts the graceful drain.
async fn drain_on_signal(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c().await.context("Installing the Ctrl+C handler")
    };

    #[cfg(unix)]
    let sigterm = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Installing the SIGTERM handler")?
            .recv()
            .await;
        Ok(())
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<Result<()>>();

    let received = tokio::select! {
        res = ctrl_c => res,
        res = sigterm => res,
    };

    match received {
        Ok(()) => {
            info!("Shutdown signal received, draining connections");
            handle.graceful_shutdown(Some(DRAIN_TIMEOUT));
        }
        Err(e) => error!("Could not listen for shutdown signals: {e}"),
    }
}
