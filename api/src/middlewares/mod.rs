use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

#[tracing::instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
pub async fn log_request(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
