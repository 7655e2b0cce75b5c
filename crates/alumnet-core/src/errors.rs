//! Application error type with HTTP response conversion.
//!
//! Every fallible operation in the API returns [`AppError`]. The error carries an
//! [`ErrorKind`] that decides the HTTP status and whether the underlying message
//! may be shown to the caller. Storage and internal failures are logged and
//! replaced by a generic message in the response body.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Category of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request body could not be parsed into the expected shape.
    BadRequest,
    /// Request was well-formed but failed field or business validation.
    Validation,
    NotFound,
    /// Bad credentials, or a missing, invalid or expired token.
    Unauthorized,
    /// Authenticated caller lacks the required role.
    Forbidden,
    /// Persistence failure.
    Storage,
    /// Any other server-side failure (hashing, token signing).
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error message is safe to return to the client.
    pub fn is_exposed(self) -> bool {
        !matches!(self, ErrorKind::Storage | ErrorKind::Internal)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, Error::msg(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, Error::msg(message.into()))
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Storage, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, Error::msg(message.into()))
    }

    /// Message as it would appear in the response body.
    pub fn public_message(&self) -> String {
        if self.kind.is_exposed() {
            self.error.to_string()
        } else {
            "Internal server error".to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if !self.kind.is_exposed() {
            error!(error = ?self.error, kind = ?self.kind, "Request failed");
        }

        let body = Json(json!({
            "error": self.public_message()
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ErrorKind::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::Validation.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ErrorKind::Storage.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorKind::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_message_is_hidden() {
        let err = AppError::database(anyhow!("relation \"users\" does not exist"));
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_client_error_message_is_exposed() {
        let err = AppError::not_found(anyhow!("Alumni not found"));
        assert_eq!(err.public_message(), "Alumni not found");

        let err = AppError::unauthorized("Invalid credentials");
        assert_eq!(err.public_message(), "Invalid credentials");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_from_foreign_error_is_internal() {
        let err: AppError = "x".parse::<i32>().unwrap_err().into();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::forbidden("Access denied").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = AppError::database(anyhow!("connection reset")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
