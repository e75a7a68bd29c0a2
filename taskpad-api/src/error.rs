//! Error Types for the Taskpad API
//!
//! This module defines error handling for the API layer, including:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskpad_core::{StoreError, ValidationError};

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code and represents
/// a category of error that can occur during API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request contains invalid input data
    InvalidInput,

    /// Required field is missing from request
    MissingField,

    /// Field value is out of valid range
    InvalidRange,

    /// Field format is incorrect
    InvalidFormat,

    // ========================================================================
    // Not Found Errors (404)
    // ========================================================================
    /// Requested note does not exist
    NoteNotFound,

    // ========================================================================
    // Server Errors (500, 503)
    // ========================================================================
    /// Internal server error
    InternalError,

    /// Database operation failed
    DatabaseError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// Database connection pool exhausted
    ConnectionPoolExhausted,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput
            | ErrorCode::MissingField
            | ErrorCode::InvalidRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,

            ErrorCode::NoteNotFound => StatusCode::NOT_FOUND,

            ErrorCode::ServiceUnavailable
            | ErrorCode::ConnectionPoolExhausted => StatusCode::SERVICE_UNAVAILABLE,

            ErrorCode::InternalError
            | ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::MissingField => "Required field is missing",
            ErrorCode::InvalidRange => "Value is out of valid range",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::NoteNotFound => "Note not found",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database operation failed",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
            ErrorCode::ConnectionPoolExhausted => "Connection pool exhausted",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
///
/// This type is returned by all API endpoints when an error occurs and
/// provides a consistent error format across the REST surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (field errors etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a new API error with the given code, using the default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            details: None,
        }
    }

    /// Add additional details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors for common errors
    // ========================================================================

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required field '{}' is missing", field),
        )
    }

    /// Create an InvalidRange error.
    pub fn invalid_range(field: &str, min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!("Field '{}' must be between {} and {}", field, min, max),
        )
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFormat,
            format!("Field '{}' has invalid format, expected {}", field, expected),
        )
    }

    /// Create a NoteNotFound error.
    pub fn note_not_found(note_id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NoteNotFound,
            format!("Note {} not found", note_id),
        )
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a DatabaseError.
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Create a ServiceUnavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Create a ConnectionPoolExhausted error.
    pub fn connection_pool_exhausted() -> Self {
        Self::from_code(ErrorCode::ConnectionPoolExhausted)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

/// Implement IntoResponse for ApiError to enable automatic error handling in
/// Axum. ApiError can be returned directly from handlers.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self);
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM STANDARD ERRORS
// ============================================================================

/// Convert from taskpad_core::StoreError to ApiError.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::note_not_found(id),
            StoreError::Unavailable { reason } => {
                tracing::error!(%reason, "Store unavailable");
                ApiError::service_unavailable("Note store is unavailable")
            }
            StoreError::Backend { reason } => {
                tracing::error!(%reason, "Store backend error");
                ApiError::database_error("Database operation failed")
            }
            StoreError::LockPoisoned => {
                tracing::error!("Store lock poisoned");
                ApiError::internal_error("Store lock poisoned")
            }
        }
    }
}

/// Convert from taskpad_core::ValidationError to ApiError.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::RequiredFieldMissing { field } => ApiError::missing_field(&field),
            ValidationError::InvalidValue { field, reason } => {
                ApiError::invalid_input(format!("Invalid value for '{}': {}", field, reason))
            }
            ValidationError::TooLong { field, max } => ApiError::invalid_range(&field, 1, max),
        }
    }
}

/// Convert from tokio_postgres::Error to ApiError.
impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        // Log the full error, return a generic message to avoid leaking details
        tracing::error!("Database error: {:?}", err);
        ApiError::database_error("Database operation failed")
    }
}

/// Convert from deadpool_postgres::PoolError to ApiError.
impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        tracing::error!("Connection pool error: {:?}", err);

        match err {
            deadpool_postgres::PoolError::Timeout(_) => ApiError::connection_pool_exhausted(),
            deadpool_postgres::PoolError::Closed => {
                ApiError::service_unavailable("Database connection pool is closed")
            }
            _ => ApiError::database_error("Failed to acquire database connection"),
        }
    }
}

/// Convert from uuid::Error to ApiError.
impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::invalid_format("id", &format!("valid UUID: {}", err))
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::MissingField.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidFormat.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NoteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::InternalError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::DatabaseError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::ServiceUnavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::missing_field("title");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("title"));

        let err = ApiError::note_not_found(uuid::Uuid::nil());
        assert_eq!(err.code, ErrorCode::NoteNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ApiError = StoreError::Unavailable {
            reason: "connection refused".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);

        let err: ApiError = StoreError::Backend {
            reason: "constraint violation".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: ApiError = ValidationError::RequiredFieldMissing {
            field: "title".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::MissingField);

        let err: ApiError = ValidationError::TooLong {
            field: "description".to_string(),
            max: 500,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidRange);
    }

    #[test]
    fn test_error_serialization() -> Result<(), serde_json::Error> {
        let err = ApiError::invalid_format("id", "valid UUID");
        let json = serde_json::to_string(&err)?;

        assert!(json.contains("INVALID_FORMAT"));

        let deserialized: ApiError = serde_json::from_str(&json)?;
        assert_eq!(deserialized, err);
        Ok(())
    }
}
