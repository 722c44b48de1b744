// src/application/error_handling.rs
//
// Error Handling for HTTP handlers
//
// ARCHITECTURE:
// - Maps internal errors to JSON error bodies and status codes
// - This is the only place user-facing error text is produced
// - Storage failures are logged in full and answered generically

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    #[serde(rename = "error")]
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Unknown route (404)
    NotFound,

    /// Missing required field (400)
    Validation,

    /// Kind other than lost/found (400)
    InvalidKind,

    /// Unreadable stored data (500)
    DomainError,

    /// Store unreachable or failing (500)
    Database,

    /// Export file could not be written (500)
    FileSystem,

    /// Anything else (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Validation | ErrorType::InvalidKind => StatusCode::BAD_REQUEST,
            ErrorType::DomainError
            | ErrorType::Database
            | ErrorType::FileSystem
            | ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::Validation(message)) => {
                log::warn!("Rejected submission: {}", message);
                Self::new(ErrorType::Validation, message, None)
            }

            AppError::InvalidKind(kind) => {
                log::warn!("Rejected item type {:?}", kind);
                Self::new(ErrorType::InvalidKind, "Invalid item type", Some(kind))
            }

            AppError::Domain(domain_error) => {
                log::error!("Stored data rejected: {}", domain_error);
                Self::new(
                    ErrorType::DomainError,
                    "Stored data is invalid",
                    Some(domain_error.to_string()),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Schema(schema_error) => {
                log::error!("Schema error: {}", schema_error);
                Self::new(ErrorType::Database, "Database schema is not usable", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            other => {
                log::error!("Internal error: {}", other);
                Self::new(ErrorType::Internal, other.to_string(), None)
            }
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("No route for {}", path), None)
    }
}

/// Handler error: an AppError answered as JSON with the matching status
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.error_type.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ErrorResponse::from_app_error(self.0).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
