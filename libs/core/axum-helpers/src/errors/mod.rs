use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every failed request renders this envelope:
/// - `status`: the HTTP status text (e.g. "Bad Request", "Not Found")
/// - `message`: a human-readable description of what went wrong
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "Not Found",
///   "message": "Product not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status text
    pub status: String,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain error enums convert into this at the handler boundary; it is the
/// only place where error kinds become status codes and response bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// The HTTP status this error renders with.
    ///
    /// `Conflict` stays a distinct variant for the error taxonomy but renders
    /// as a 400 so duplicate business identifiers share the shape of every
    /// other client-side failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                msg
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                // Clients get a generic message, the detail stays in the logs
                "Something went wrong".to_string()
            }
        };

        let body = ErrorResponse {
            status: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for requests that match no route.
pub async fn not_found() -> Response {
    AppError::NotFound("Resource not found".to_string()).into_response()
}
