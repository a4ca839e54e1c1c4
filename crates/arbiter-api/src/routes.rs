//! HTTP routes for the judgment service
//!
//! Two endpoints, one pattern: validate the body, build the prompt, await
//! one gateway call, relay the answer. The inference client is reached only
//! through [`AppState`].

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::prompt;
use crate::state::AppState;

/// A debate case submitted for judgment
///
/// All three fields are required; empty strings are accepted as arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseRequest {
    pub topic: String,
    pub player_1_argument: String,
    pub player_2_argument: String,
}

/// Verdict response
#[derive(Debug, Serialize)]
pub struct JudgeResponse {
    /// The model's winner declaration and explanation, verbatim
    pub winner_and_verdict: String,
    /// Settlement transaction hash of the TEE inference, relayed unverified
    pub cryptographic_proof_hash: String,
}

/// Generated-topic response
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub topic: String,
}

/// Judge a submitted case
pub async fn judge_case(
    State(state): State<AppState>,
    body: Result<Json<CaseRequest>, JsonRejection>,
) -> ApiResult<Json<JudgeResponse>> {
    let Json(case) = body?;

    let completion = state.inference().chat(prompt::judge_request(&case)).await?;

    Ok(Json(JudgeResponse {
        winner_and_verdict: completion.content,
        cryptographic_proof_hash: completion.transaction_hash,
    }))
}

/// Invent a fresh debate topic
pub async fn generate_topic(State(state): State<AppState>) -> ApiResult<Json<TopicResponse>> {
    let completion = state.inference().chat(prompt::topic_request()).await?;

    Ok(Json(TopicResponse {
        topic: completion.content,
    }))
}

/// Build the API router
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/judge", post(judge_case))
        .route("/generate-topic", get(generate_topic))
        .with_state(state)
}
