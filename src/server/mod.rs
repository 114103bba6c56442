//! HTTP shell around the analysis pipeline
//!
//! `POST /upload_text` replaces the active document, `GET /preprocess`
//! analyzes it, and `GET /` answers liveness checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::ServerConfig;

pub struct Server {
    state: AppState,
    addr: SocketAddr,
    allowed_origins: Vec<String>,
}

impl Server {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            addr: config.socket_addr(),
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    pub async fn run(self) -> std::io::Result<()> {
        let router = create_router(self.state, &self.allowed_origins);
        let listener = TcpListener::bind(self.addr).await?;

        info!("Server listening on http://{}", listener.local_addr()?);
        info!("  POST /upload_text - Store a transcript");
        info!("  GET  /preprocess  - Frequency list and co-occurrence graph");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}
