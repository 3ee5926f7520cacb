//! Path extractor for UUID identifiers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::errors::AppError;

/// Extracts a single `{id}` path segment and parses it as a UUID.
///
/// A malformed segment short-circuits the handler with a structured
/// 400 response, so handlers only ever see valid identifiers:
///
/// ```ignore
/// async fn get_item(UuidPath(id): UuidPath) -> String {
///     format!("item {id}")
/// }
/// ```
pub struct UuidPath(pub Uuid);

impl UuidPath {
    fn parse(raw: &str) -> Result<Self, Response> {
        raw.parse::<Uuid>()
            .map(UuidPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid UUID: {}", raw)).into_response())
    }
}

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Self::parse(&raw)
    }
}
