use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Request logging wrapped around the whole router.
///
/// Logs an entry line before the rest of the chain runs, then an exit line
/// with the method, the full request URL (configured base address plus the
/// request URI), the request content length, and a wall-clock timestamp.
/// Observability only: the response passes through untouched and a panic in
/// a downstream handler propagates to the runtime.
pub async fn request_log(State(base_url): State<String>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let url = format!("{}{}", base_url, request.uri());
    let content_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(0);

    info!(method = %method, path = %request.uri().path(), "request received");

    let response = next.run(request).await;

    info!(
        method = %method,
        url = %url,
        content_length,
        status = %response.status(),
        timestamp = %chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
        "request completed"
    );

    response
}
