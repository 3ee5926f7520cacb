use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler so unknown routes return the structured error body
/// instead of axum's bare 404.
pub async fn not_found() -> Response {
    let body = ErrorResponse {
        message: "The requested resource was not found".to_string(),
        ..ErrorResponse::from_code(ErrorCode::NotFound)
    };

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_returns_structured_404() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
