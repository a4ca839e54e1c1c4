use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use arbiter_api::{routes::api_router, state::AppState, ArbiterServer, ServerConfig};
use arbiter_llm::{InferenceError, MockProvider};

fn test_router(provider: Arc<MockProvider>) -> Router {
    api_router(AppState::new(provider))
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_judge_returns_verdict_and_proof_hash() {
    let provider = Arc::new(MockProvider::constant(
        "Player 2 wins: consistency beats flexibility.",
        "0xabc123",
    ));
    let router = test_router(provider.clone());

    let case = serde_json::json!({
        "topic": "Tabs vs spaces",
        "player_1_argument": "Tabs are flexible",
        "player_2_argument": "Spaces are consistent"
    });

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .header("Content-Type", "application/json")
        .body(Body::from(case.to_string()))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["winner_and_verdict"],
        "Player 2 wins: consistency beats flexibility."
    );
    assert_eq!(json["cryptographic_proof_hash"], "0xabc123");
    // The verdict body carries exactly these two fields
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_judge_missing_field_never_reaches_provider() {
    let provider = Arc::new(MockProvider::constant("unused", "0x0"));
    let router = test_router(provider.clone());

    // player_2_argument omitted
    let case = serde_json::json!({
        "topic": "Tabs vs spaces",
        "player_1_argument": "Tabs are configurable."
    });

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .header("Content-Type", "application/json")
        .body(Body::from(case.to_string()))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("player_2_argument"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_judge_rejects_malformed_json() {
    let provider = Arc::new(MockProvider::constant("unused", "0x0"));
    let router = test_router(provider.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(!json["detail"].as_str().unwrap().is_empty());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_judge_rejects_missing_content_type() {
    let provider = Arc::new(MockProvider::constant("unused", "0x0"));
    let router = test_router(provider.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .body(Body::from(r#"{"topic": "t", "player_1_argument": "a", "player_2_argument": "b"}"#))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_judge_empty_arguments_are_valid() {
    let provider = Arc::new(MockProvider::constant(
        "Player 1 wins: silence was louder.",
        "0xdef456",
    ));
    let router = test_router(provider.clone());

    let case = serde_json::json!({
        "topic": "",
        "player_1_argument": "",
        "player_2_argument": ""
    });

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .header("Content-Type", "application/json")
        .body(Body::from(case.to_string()))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_gateway_unreachable_is_503() {
    let provider = Arc::new(MockProvider::failing(InferenceError::ConnectionFailed(
        "connect timeout".to_string(),
    )));
    let router = test_router(provider);

    let case = serde_json::json!({
        "topic": "Tabs vs spaces",
        "player_1_argument": "a",
        "player_2_argument": "b"
    });

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .header("Content-Type", "application/json")
        .body(Body::from(case.to_string()))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "Connection failed: connect timeout");
}

#[tokio::test]
async fn test_gateway_rejection_is_502() {
    let provider = Arc::new(MockProvider::failing(InferenceError::Rejected(
        "Status: 401 Unauthorized".to_string(),
    )));
    let router = test_router(provider);

    let case = serde_json::json!({
        "topic": "Tabs vs spaces",
        "player_1_argument": "a",
        "player_2_argument": "b"
    });

    let req = Request::builder()
        .method("POST")
        .uri("/judge")
        .header("Content-Type", "application/json")
        .body(Body::from(case.to_string()))
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "Inference rejected: Status: 401 Unauthorized");
}

#[tokio::test]
async fn test_generate_topic_returns_topic() {
    let provider = Arc::new(MockProvider::constant(
        "Is pineapple on pizza a crime against humanity?",
        "0x9999",
    ));
    let router = test_router(provider.clone());

    let req = Request::builder()
        .uri("/generate-topic")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["topic"], "Is pineapple on pizza a crime against humanity?");
    // No proof hash on this endpoint, only the topic
    assert_eq!(json.as_object().unwrap().len(), 1);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_generate_topic_failure_is_503() {
    let provider = Arc::new(MockProvider::failing(InferenceError::ConnectionFailed(
        "dns error".to_string(),
    )));
    let router = test_router(provider);

    let req = Request::builder()
        .uri("/generate-topic")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "Connection failed: dns error");
}

#[tokio::test]
async fn test_generate_topic_rejection_is_502() {
    let provider = Arc::new(MockProvider::failing(InferenceError::InvalidResponse(
        "missing transaction hash".to_string(),
    )));
    let router = test_router(provider);

    let req = Request::builder()
        .uri("/generate-topic")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "Invalid response: missing transaction hash");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let provider = Arc::new(MockProvider::constant("topic", "0x0"));
    let server = ArbiterServer::new(ServerConfig::default(), provider);
    let router = server.router();

    let req = Request::builder()
        .uri("/generate-topic")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("X-Request-ID header missing")
        .to_str()
        .unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let provider = Arc::new(MockProvider::constant("topic", "0x0"));
    let server = ArbiterServer::new(ServerConfig::default(), provider);
    let router = server.router();

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/judge")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("allow-origin header missing");
    assert_eq!(allow_origin, "http://localhost:3000");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .expect("allow-credentials header missing"),
        "true"
    );
}
