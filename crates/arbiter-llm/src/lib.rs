//! # Arbiter LLM
//!
//! Inference client for The Arbiter: chat completions routed through a
//! TEE-backed gateway that settles each call on-chain and returns the
//! settlement transaction hash alongside the model output.
//!
//! ## Supported Backends
//!
//! | Provider | Type | Key Required |
//! |----------|------|--------------|
//! | OpenGradient | TEE gateway | `ARBITER_PRIVATE_KEY` |
//! | Mock | Testing | None |
//!
//! ## Quick Start
//!
//! ```rust
//! use arbiter_llm::{ChatMessage, ChatRequest, InferenceProvider, MockProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Use the mock provider for testing
//!     let provider = MockProvider::constant("Player 1 wins: sharper logic.", "0xabc");
//!
//!     let request = ChatRequest::new(vec![ChatMessage::user("Judge this debate")]);
//!     let completion = provider.chat(request).await.unwrap();
//!     println!("{} ({})", completion.content, completion.transaction_hash);
//! }
//! ```
//!
//! ## With OpenGradient
//!
//! ```rust,ignore
//! use arbiter_llm::{InferenceConfig, OpenGradientProvider};
//!
//! let config = InferenceConfig::from_env();
//! let provider = OpenGradientProvider::from_config(&config)?;
//! ```

pub mod config;
pub mod mock;
pub mod opengradient;
pub mod provider;

pub use config::{ConfigError, InferenceConfig, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
pub use mock::MockProvider;
pub use opengradient::OpenGradientProvider;
pub use provider::{
    ChatCompletion, ChatMessage, ChatRequest, InferenceError, InferenceProvider, Role,
};
