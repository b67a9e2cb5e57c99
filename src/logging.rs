use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

/// Request logging middleware: method, matched route, status, latency.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis();

    if response.status().is_server_error() {
        error!(%method, %path, status, latency_ms, "server error");
    } else if response.status().is_client_error() {
        warn!(%method, %path, status, latency_ms, "client error");
    } else {
        info!(%method, %path, status, latency_ms, "request completed");
    }

    response
}
