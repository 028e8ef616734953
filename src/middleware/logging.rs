use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// Structured access log for every request, tagged with a fresh request id.
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_owned())
        .unwrap_or_else(|| "unknown".to_owned());
    let remote_addr = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        "incoming request"
    );

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    // Routes answer 200 even when they fell back, so anything else is worth a look.
    match status {
        200..=399 => tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            uri = %uri,
            status,
            duration_ms = %duration_ms,
            "request completed"
        ),
        400..=499 => tracing::warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            uri = %uri,
            status,
            duration_ms = %duration_ms,
            "request completed (client error)"
        ),
        _ => tracing::error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            uri = %uri,
            status,
            duration_ms = %duration_ms,
            "request completed (server error)"
        ),
    }

    response
}
