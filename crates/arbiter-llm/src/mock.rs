//! Mock inference provider for testing
//!
//! Returns canned completions (or a canned failure) without network access,
//! and counts invocations so callers can assert whether the provider was
//! reached at all.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::provider::{ChatCompletion, ChatRequest, InferenceError, InferenceProvider};

/// A mock provider that cycles through predefined completions
#[derive(Debug)]
pub struct MockProvider {
    /// Name of this mock
    name: String,
    /// Canned (content, transaction hash) pairs, cycled per call
    completions: Vec<(String, String)>,
    /// Canned failure returned instead of a completion
    failure: Option<InferenceError>,
    /// Current completion index
    index: AtomicUsize,
    /// Total chat() invocations
    calls: AtomicUsize,
}

impl MockProvider {
    /// Create a mock cycling through the given (content, transaction hash) pairs
    pub fn new(completions: Vec<(String, String)>) -> Self {
        Self {
            name: "mock".to_string(),
            completions,
            failure: None,
            index: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns the same completion
    pub fn constant(content: &str, transaction_hash: &str) -> Self {
        Self::new(vec![(content.to_string(), transaction_hash.to_string())])
    }

    /// Create a mock that fails every call with the given error
    pub fn failing(error: InferenceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(vec![])
        }
    }

    /// Number of times chat() has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl InferenceProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn chat(&self, _request: ChatRequest) -> Result<ChatCompletion, InferenceError> {
        let start = Instant::now();
        self.calls.fetch_add(1, Ordering::Relaxed);

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let (content, transaction_hash) = if self.completions.is_empty() {
            ("mock completion".to_string(), "0x0".to_string())
        } else {
            let idx = self.index.fetch_add(1, Ordering::Relaxed);
            self.completions[idx % self.completions.len()].clone()
        };

        Ok(ChatCompletion {
            content,
            transaction_hash,
            model: self.name.clone(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
