//! Application state
//!
//! The inference client is constructed once at startup and injected here;
//! handlers reach it through the shared state, never a process-wide global.

use std::sync::Arc;

use arbiter_llm::InferenceProvider;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    inference: Arc<dyn InferenceProvider>,
}

impl AppState {
    /// Create new application state around an inference client
    pub fn new(inference: Arc<dyn InferenceProvider>) -> Self {
        Self { inference }
    }

    /// Get the inference client (cloned Arc for sharing)
    pub fn inference(&self) -> Arc<dyn InferenceProvider> {
        self.inference.clone()
    }
}
