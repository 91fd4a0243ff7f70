//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn, Level};

/// Log one line per request with its outcome and latency
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let duration_ms = format!("{elapsed_ms:.2}");
    let code = status.as_u16();

    if level_for(status) == Level::INFO {
        info!(%method, %path, status = code, %duration_ms, "Request completed");
    } else if status.is_server_error() {
        warn!(%method, %path, status = code, %duration_ms, "Request completed with server error");
    } else {
        warn!(%method, %path, status = code, %duration_ms, "Request completed with client error");
    }

    response
}

/// 5xx and every 4xx except 404 are logged as warnings
fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() || (status.is_client_error() && status != StatusCode::NOT_FOUND) {
        Level::WARN
    } else {
        Level::INFO
    }
}
