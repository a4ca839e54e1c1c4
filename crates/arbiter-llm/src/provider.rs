//! Inference provider trait and common types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from inference providers
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Inference rejected: {0}")]
    Rejected(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single message in a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message (persona/instructions)
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered message list (system instruction first)
    pub messages: Vec<ChatMessage>,
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Create a request with default sampling settings
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// A completed inference call
///
/// `transaction_hash` is the settlement identifier the network hands back for
/// the call; it is relayed to callers verbatim and never verified here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// The generated text
    pub content: String,
    /// On-chain transaction hash attesting the TEE execution
    pub transaction_hash: String,
    /// Model that served the call
    pub model: String,
    /// Time taken in milliseconds
    pub latency_ms: u64,
}

/// Trait for inference providers
#[async_trait]
pub trait InferenceProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Submit a chat completion
    async fn chat(&self, request: ChatRequest) -> Result<ChatCompletion, InferenceError>;
}
