//! # Arbiter API
//!
//! HTTP gateway for The Arbiter, a debate-judging service backed by
//! TEE-verified LLM inference.
//!
//! Features:
//! - Axum-based web server
//! - Judge and topic-generation endpoints
//! - Error taxonomy with distinct status codes per failure class
//! - Tower middleware (request IDs, tracing, CORS)
//! - Graceful shutdown

pub mod error;
pub mod middleware;
pub mod prompt;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{api_router, CaseRequest, JudgeResponse, TopicResponse};
pub use server::{init_tracing, ArbiterServer, ServerConfig};
pub use state::AppState;
