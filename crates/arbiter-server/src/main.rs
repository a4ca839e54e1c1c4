//! The Arbiter - standalone entry point for the judgment API
//!
//! This crate is a thin wrapper around `arbiter-api` to provide a runnable
//! binary for deployments without modifying the core library crates.

use anyhow::Result;
use std::sync::Arc;

use arbiter_api::{ArbiterServer, ServerConfig};
use arbiter_llm::{InferenceConfig, OpenGradientProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing using the standard configuration from arbiter-api
    arbiter_api::server::init_tracing();

    tracing::info!("⚖️  Starting The Arbiter...");

    // Platform compatibility: map a generic $PORT (Railway, Render) to ARBITER_PORT
    if let Ok(port) = std::env::var("PORT") {
        if std::env::var("ARBITER_PORT").is_err() {
            tracing::info!("Mapping platform PORT {} to ARBITER_PORT", port);
            std::env::set_var("ARBITER_PORT", port);
        }
    }

    // Load the inference credential and gateway settings; an absent or
    // placeholder key aborts startup rather than serving unprovable verdicts.
    let inference_config = InferenceConfig::from_env();
    let provider = OpenGradientProvider::from_config(&inference_config).map_err(|e| {
        tracing::error!("Failed to configure inference client: {}", e);
        e
    })?;

    tracing::info!(
        gateway = %inference_config.gateway_url,
        model = %inference_config.model,
        "Inference gateway configured"
    );
    tracing::info!("$OPG token approval skipped, gateway ready for inference");

    // Run the server with graceful shutdown support
    let config = ServerConfig::from_env();
    let server = ArbiterServer::new(config, Arc::new(provider));
    server.run().await.map_err(|e| {
        tracing::error!("Server error during execution: {}", e);
        e
    })?;

    Ok(())
}
