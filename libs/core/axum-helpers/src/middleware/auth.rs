use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::auth::AuthConfig;

/// Static-token auth gate.
///
/// Layer it with `axum::middleware::from_fn_with_state` in front of the
/// routes that require a token. The `Authorization` header is compared
/// verbatim against the configured token; a mismatch short-circuits with
/// 401 and the downstream handler never runs. An empty configured token
/// admits every request.
pub async fn token_auth(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !auth.allows(header) {
        return AppError::Unauthorized("Unauthorized".to_string()).into_response();
    }

    next.run(request).await
}
