//! Middleware for the judgment API

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tower_http::cors::CorsLayer;

/// Request ID wrapper
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Request ID middleware
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    // Add to request extensions
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    // Add to response headers
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("X-Request-ID", value);
    }

    response
}

/// Request tracing middleware
pub async fn trace_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        latency_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

/// CORS configuration
///
/// Mirrors any origin and allows credentials, the posture the browser game
/// client expects. Tighten before any real deployment.
pub fn cors_layer() -> CorsLayer {
    tracing::warn!("CORS is wide open (all origins, credentials allowed) - prototype only");
    CorsLayer::very_permissive()
}
