//! Configuration for the inference client
//!
//! Handles the provider credential, gateway location, and model selection.
//! The credential is read once at startup; a missing key (or the well-known
//! placeholder shipped in tutorials) is a hard error, never a silent
//! fallback.

use serde::{Deserialize, Serialize};
use std::env;

/// Default OpenGradient inference gateway
pub const DEFAULT_GATEWAY_URL: &str = "https://llm.opengradient.ai";

/// Default TEE-routed model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Placeholder literal from the quickstart docs; deploying with it is a
/// misconfiguration, not a credential.
const INSECURE_PLACEHOLDER: &str = "YOUR_PRIVATE_KEY_HERE";

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Inference client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Wallet private key used to authenticate to the gateway
    /// (env: ARBITER_PRIVATE_KEY)
    pub private_key: Option<String>,
    /// Gateway base URL (env: ARBITER_GATEWAY_URL)
    pub gateway_url: String,
    /// Model to route through the TEE (env: ARBITER_MODEL)
    pub model: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            private_key: None,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl InferenceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            private_key: env::var("ARBITER_PRIVATE_KEY").ok(),
            gateway_url: env::var("ARBITER_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            model: env::var("ARBITER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }

    /// Get the private key, failing on an absent, empty, or placeholder value
    pub fn require_private_key(&self) -> Result<&str, ConfigError> {
        let key = self
            .private_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("ARBITER_PRIVATE_KEY".to_string()))?;
        if key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "ARBITER_PRIVATE_KEY is empty".to_string(),
            ));
        }
        if key == INSECURE_PLACEHOLDER {
            return Err(ConfigError::Invalid(
                "ARBITER_PRIVATE_KEY holds the placeholder value; supply a real key".to_string(),
            ));
        }
        Ok(key)
    }
}
