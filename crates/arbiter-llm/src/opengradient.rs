//! OpenGradient inference provider
//!
//! Chat completions are routed through OpenGradient's TEE-backed gateway
//! (an OpenAI-compatible surface). Each settled call carries the on-chain
//! transaction hash of the inference, which callers receive verbatim as
//! their proof reference.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::config::{ConfigError, InferenceConfig};
use crate::provider::{ChatCompletion, ChatMessage, ChatRequest, InferenceError, InferenceProvider};

/// Gateway request format (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Gateway response format
#[derive(Debug, Deserialize)]
struct GatewayResponse {
    choices: Vec<Choice>,
    model: String,
    /// Settlement hash of the inference transaction
    transaction_hash: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: String,
}

impl GatewayResponse {
    /// Map the wire body into a completion.
    ///
    /// A settled call must carry both the completion content and the
    /// transaction hash (the caller-visible proof reference); a body missing
    /// either is not a usable answer.
    fn into_completion(self, latency_ms: u64) -> Result<ChatCompletion, InferenceError> {
        let content = self
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                InferenceError::InvalidResponse("missing completion content".to_string())
            })?;

        let transaction_hash = self.transaction_hash.ok_or_else(|| {
            InferenceError::InvalidResponse("missing transaction hash".to_string())
        })?;

        Ok(ChatCompletion {
            content,
            transaction_hash,
            model: self.model,
            latency_ms,
        })
    }
}

/// OpenGradient provider
pub struct OpenGradientProvider {
    /// Wallet private key authenticating to the gateway
    private_key: String,
    /// Model to route through the TEE (e.g. "gpt-4o")
    model: String,
    /// HTTP client
    client: reqwest::Client,
    /// Base URL
    base_url: String,
}

impl OpenGradientProvider {
    /// Create a new OpenGradient provider against the default gateway
    pub fn new(private_key: &str, model: &str) -> Self {
        Self {
            private_key: private_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
            base_url: crate::config::DEFAULT_GATEWAY_URL.to_string(),
        }
    }

    /// Create with the TEE-routed GPT-4o model
    pub fn gpt4o(private_key: &str) -> Self {
        Self::new(private_key, crate::config::DEFAULT_MODEL)
    }

    /// Create with a custom gateway URL
    pub fn with_url(base_url: &str, private_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::new(private_key, model)
        }
    }

    /// Build a provider from configuration, rejecting unusable credentials
    pub fn from_config(config: &InferenceConfig) -> Result<Self, ConfigError> {
        let key = config.require_private_key()?;
        Ok(Self::with_url(&config.gateway_url, key, &config.model))
    }
}

// Manual Debug: the private key must never reach logs or panic output.
impl fmt::Debug for OpenGradientProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGradientProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl InferenceProvider for OpenGradientProvider {
    fn name(&self) -> &str {
        "opengradient"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatCompletion, InferenceError> {
        let start = Instant::now();
        let url = format!("{}/v1/chat/completions", self.base_url);

        let gateway_request = GatewayRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.private_key)
            .json(&gateway_request)
            .send()
            .await
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Rejected(format!(
                "Status: {}, Body: {}",
                status, body
            )));
        }

        let gateway_response: GatewayResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let completion = gateway_response.into_completion(start.elapsed().as_millis() as u64)?;

        tracing::debug!(
            model = %completion.model,
            transaction_hash = %completion.transaction_hash,
            latency_ms = completion.latency_ms,
            "inference settled"
        );

        Ok(completion)
    }
}
