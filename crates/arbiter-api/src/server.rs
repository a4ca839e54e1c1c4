//! Arbiter API server with graceful shutdown

use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use arbiter_llm::InferenceProvider;

use crate::error::ApiError;
use crate::middleware::{cors_layer, request_id_middleware, trace_middleware};
use crate::routes::api_router;
use crate::state::AppState;

/// Default listen port when none is configured
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
///
/// Deliberately small: no request timeout is set here, so in-flight gateway
/// calls inherit whatever the inference client's defaults are.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables (ARBITER_PORT)
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("ARBITER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
        }
    }
}

/// Arbiter API server
pub struct ArbiterServer {
    config: ServerConfig,
    state: AppState,
}

impl ArbiterServer {
    /// Create a new server around an injected inference client
    pub fn new(config: ServerConfig, inference: Arc<dyn InferenceProvider>) -> Self {
        tracing::info!(provider = %inference.name(), "inference client attached");
        Self {
            config,
            state: AppState::new(inference),
        }
    }

    /// Get the configured router
    pub fn router(&self) -> Router {
        // Apply middleware layers (last added runs first on the request)
        api_router(self.state.clone())
            // CORS (answers preflight before the handlers)
            .layer(cors_layer())
            // Tracing
            .layer(middleware::from_fn(trace_middleware))
            // Request ID (outermost, so tracing sees the id)
            .layer(middleware::from_fn(request_id_middleware))
    }

    /// Run the server with graceful shutdown
    pub async fn run(self) -> Result<(), ApiError> {
        let app = self.router();
        let addr = self.config.addr;

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("⚖️  The Arbiter is listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Initialize tracing subscriber
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,arbiter_api=debug,arbiter_llm=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
