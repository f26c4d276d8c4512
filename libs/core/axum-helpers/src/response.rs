//! The `{data, message}` success envelope shared by every endpoint that
//! returns a body.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success envelope: the payload plus a short operation message.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: String,
}

/// A success response carrying an [`Envelope`].
///
/// Success bodies go out as `application/json; charset=utf-8`, unlike error
/// bodies which use the plain `application/json` the `Json` extractor emits.
pub struct EnvelopeResponse<T>(StatusCode, Envelope<T>);

impl<T: Serialize> IntoResponse for EnvelopeResponse<T> {
    fn into_response(self) -> Response {
        let mut response = (self.0, Json(self.1)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        response
    }
}

/// 200 envelope response.
pub fn ok<T: Serialize>(data: T, message: &str) -> EnvelopeResponse<T> {
    EnvelopeResponse(
        StatusCode::OK,
        Envelope {
            data,
            message: message.to_string(),
        },
    )
}

/// 201 envelope response.
pub fn created<T: Serialize>(data: T, message: &str) -> EnvelopeResponse<T> {
    EnvelopeResponse(
        StatusCode::CREATED,
        Envelope {
            data,
            message: message.to_string(),
        },
    )
}
