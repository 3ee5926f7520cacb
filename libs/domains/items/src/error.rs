use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("No item with UPC '{0}'")]
    UpcNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    Store(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::UpcNotFound(upc) => {
                AppError::NotFound(format!("No item with UPC '{}'", upc))
            }
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Store(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Store(err.to_string())
    }
}
