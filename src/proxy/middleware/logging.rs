// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use tokio::time::Instant;

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    // Skip health checks to avoid log noise
    if path == "/healthz" {
        tracing::trace!("Heartbeat: {} {}", method, path);
    } else {
        tracing::info!(
            "{} {} -> {} ({} ms)",
            method,
            path,
            response.status().as_u16(),
            start.elapsed().as_millis()
        );
    }

    response
}
