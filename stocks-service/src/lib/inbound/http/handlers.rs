use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::account::errors::AccountError;
use crate::quotes::errors::QuoteError;

pub mod get_quote;
pub mod login;
pub mod register;

/// Token payload returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Boundary error: every failure leaves the service as a status code and a
/// generic `{"message": ...}` body. Internal causes are logged where the
/// conversion happens, never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    UnprocessableEntity(String),
    Unauthorized(String),
    Conflict(String),
    BadGateway(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::AlreadyExists => ApiError::Conflict("User already exists".to_string()),
            AccountError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AccountError::InvalidEmail(e) => ApiError::UnprocessableEntity(e.to_string()),
            AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::Database(_)
            | AccountError::Unknown(_) => {
                tracing::error!(error = %err, "Account operation failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        tracing::error!(error = %err, "Quote fetch failed");
        ApiError::BadGateway("Failed to fetch stock price".to_string())
    }
}
