//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// JSON body extractor with automatic validation.
///
/// Deserializes the request body and runs the type's `Validate` impl.
/// A body that fails to parse or validate is rejected with a 400 error
/// envelope carrying a single deterministic message.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     payload.name
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::info!("Request body rejected: {}", rejection.body_text());
            AppError::BadRequest("Invalid request body".to_string()).into_response()
        })?;

        data.validate()
            .map_err(|e| AppError::BadRequest(validation_message(&e)).into_response())?;

        Ok(ValidatedJson(data))
    }
}

/// Collapse field-level validation errors into one human-readable message.
///
/// Fields are sorted by name so the same failure always produces the same
/// message, independent of hash ordering.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let fields: BTreeMap<_, _> = errors.field_errors().into_iter().collect();

    let parts: Vec<String> = fields
        .iter()
        .map(|(field, field_errors)| {
            let reason = field_errors
                .first()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("failed the '{}' rule", err.code),
                })
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{} {}", field, reason)
        })
        .collect();

    parts.join("; ")
}
