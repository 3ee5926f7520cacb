//! Machine-readable error codes shared by every API response.
//!
//! Each code carries three faces: a SCREAMING_SNAKE_CASE identifier for
//! clients, a numeric code for structured logs and dashboards, and a
//! fallback message for when a handler has nothing more specific to say.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error categories the API reports. Numeric codes live in the 1000
/// range; gaps are reserved for codes retired from earlier revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A request body failed its validation rules
    ValidationError,

    /// A path or query parameter was not a well-formed UUID
    InvalidUuid,

    /// The addressed resource does not exist
    NotFound,

    /// Unexpected failure inside the service
    InternalError,

    /// A downstream dependency is unreachable
    ServiceUnavailable,
}

impl ErrorCode {
    /// (numeric code, identifier, fallback message) for each variant.
    const fn parts(self) -> (i32, &'static str, &'static str) {
        match self {
            Self::ValidationError => (1001, "VALIDATION_ERROR", "Request validation failed"),
            Self::InvalidUuid => (1002, "INVALID_UUID", "Invalid UUID format"),
            Self::NotFound => (1004, "NOT_FOUND", "Resource not found"),
            Self::InternalError => (1005, "INTERNAL_ERROR", "An internal server error occurred"),
            Self::ServiceUnavailable => (
                1011,
                "SERVICE_UNAVAILABLE",
                "Service is temporarily unavailable",
            ),
        }
    }

    /// Identifier clients branch on, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        self.parts().1
    }

    /// Numeric code for logs and monitoring.
    pub fn code(&self) -> i32 {
        self.parts().0
    }

    /// Message used when the handler supplies no specific one.
    pub fn default_message(&self) -> &'static str {
        self.parts().2
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
