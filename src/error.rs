/// Error Handling Module
///
/// Every failure a handler can detect maps to a domain error below.
/// Client errors (missing fields, unknown user, wrong password, missing or
/// invalid refresh cookie) surface as 400 with a short message; store and
/// crypto faults surface as 5xx without leaking details.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::error::Error as StdError;
use std::fmt;

/// ============================================================================
/// 1. DOMAIN-SPECIFIC ERROR TYPES
/// ============================================================================

/// Request body errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    MissingFields,
    MalformedBody(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "All fields are required!"),
            ValidationError::MalformedBody(_) => write!(f, "All fields are required!"),
        }
    }
}

impl StdError for ValidationError {}

/// No user record matches the presented identity
#[derive(Debug, Clone)]
pub enum NotFoundError {
    /// Login email is unknown
    LoginUser,
    /// Refresh token names a user that no longer exists
    TokenUser,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::LoginUser => write!(f, "Login user not found!"),
            NotFoundError::TokenUser => write!(f, "Invalid user request!"),
        }
    }
}

impl StdError for NotFoundError {}

/// Authentication errors
#[derive(Debug, Clone)]
pub enum AuthError {
    WrongPassword,
    /// Refresh attempted without the refresh cookie
    MissingRefreshToken,
    /// Logout attempted without the refresh cookie
    CookieNotFound,
    /// Signature, format or expiry check failed
    InvalidToken,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::WrongPassword => write!(f, "Wrong password!"),
            AuthError::MissingRefreshToken => write!(f, "You are not authorized!"),
            AuthError::CookieNotFound => write!(f, "Cookies not found"),
            AuthError::InvalidToken => write!(f, "Invalid token request!"),
        }
    }
}

impl StdError for AuthError {}

/// User store errors
#[derive(Debug)]
pub enum DatabaseError {
    ConnectionPool(String),
    QueryExecution(String),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::ConnectionPool(msg) => write!(f, "Database connection error: {}", msg),
            DatabaseError::QueryExecution(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl StdError for DatabaseError {}

/// ============================================================================
/// 2. UNIFIED APPLICATION ERROR TYPE
/// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    NotFound(NotFoundError),
    Auth(AuthError),
    Database(DatabaseError),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::NotFound(e) => write!(f, "{}", e),
            AppError::Auth(e) => write!(f, "{}", e),
            AppError::Database(e) => write!(f, "{}", e),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl StdError for AppError {}

// ============================================================================
// FROM IMPLEMENTATIONS
// ============================================================================

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<NotFoundError> for AppError {
    fn from(err: NotFoundError) -> Self {
        AppError::NotFound(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Auth(err)
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        AppError::Database(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::Database(DatabaseError::ConnectionPool(err.to_string()))
            }
            other => AppError::Database(DatabaseError::QueryExecution(other.to_string())),
        }
    }
}

// ============================================================================
// 3. HTTP RESPONSE MAPPING
// ============================================================================

/// Error response body
///
/// Correlate with server logs through the `x-request-id` response header.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Error code for client-side handling
    pub code: String,
    pub status: u16,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(message: String, code: String, status: u16) -> Self {
        Self {
            message,
            code,
            status,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Trait for converting errors to HTTP responses with proper logging
///
/// Both run inside the request span opened by `RequestLogger`, so every
/// log line carries that request's id.
pub trait ErrorHandler {
    fn error_response(&self) -> (StatusCode, ErrorResponse);
    fn log_error(&self);
}

impl ErrorHandler for AppError {
    fn error_response(&self) -> (StatusCode, ErrorResponse) {
        let (code, message) = match self {
            AppError::Validation(e) => ("VALIDATION_ERROR", e.to_string()),
            AppError::NotFound(e) => ("NOT_FOUND", e.to_string()),
            AppError::Auth(e) => match e {
                AuthError::WrongPassword => ("INVALID_CREDENTIALS", e.to_string()),
                AuthError::MissingRefreshToken | AuthError::CookieNotFound => {
                    ("UNAUTHORIZED", e.to_string())
                }
                AuthError::InvalidToken => ("TOKEN_INVALID", e.to_string()),
            },
            AppError::Database(DatabaseError::ConnectionPool(_)) => (
                "SERVICE_UNAVAILABLE",
                "Database service temporarily unavailable".to_string(),
            ),
            AppError::Database(_) => ("DATABASE_ERROR", "Database error occurred".to_string()),
            AppError::Internal(_) => ("INTERNAL_ERROR", "Internal server error".to_string()),
        };

        let status = self.status_code();
        let error_response = ErrorResponse::new(
            message,
            code.to_string(),
            status.as_u16(),
        );

        (status, error_response)
    }

    fn log_error(&self) {
        match self {
            AppError::Validation(ValidationError::MalformedBody(detail)) => {
                tracing::warn!(detail = %detail, "Malformed request body");
            }
            AppError::Validation(e) => {
                tracing::warn!(error = %e, "Validation error");
            }
            AppError::NotFound(e) => {
                tracing::warn!(error = %e, "User not found");
            }
            AppError::Auth(AuthError::WrongPassword) => {
                tracing::warn!("Invalid credentials attempt");
            }
            AppError::Auth(e) => {
                tracing::warn!(error = %e, "Authentication error");
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
            }
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.log_error();

        let (status, error_response) = <Self as ErrorHandler>::error_response(self);

        HttpResponse::build(status).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) | AppError::Auth(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(DatabaseError::ConnectionPool(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
