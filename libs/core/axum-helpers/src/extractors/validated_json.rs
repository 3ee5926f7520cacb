//! JSON body extractor that runs `validator` rules before the handler sees the payload.

use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::{ErrorCode, ErrorResponse};

/// Deserializes the request body as JSON and applies the payload's
/// `Validate` rules. Rule violations become a 400 with a `details`
/// object keyed by field name, each entry listing the failed rules:
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItem>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match payload.validate() {
            Ok(()) => Ok(ValidatedJson(payload)),
            Err(errors) => Err(validation_rejection(&errors)),
        }
    }
}

fn validation_rejection(errors: &ValidationErrors) -> Response {
    let body = ErrorResponse {
        code: ErrorCode::ValidationError.code(),
        error: ErrorCode::ValidationError.as_str().to_string(),
        message: ErrorCode::ValidationError.default_message().to_string(),
        details: Some(validation_details(errors)),
    };

    (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
}

/// Flattens `ValidationErrors` into `{ "<field>": [{code, message, params}, ..] }`.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, failures)| {
            let entries: Vec<serde_json::Value> = failures
                .iter()
                .map(|failure| {
                    serde_json::json!({
                        "code": failure.code,
                        "message": failure.message,
                        "params": failure.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(fields)
}
