use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::identity::errors::AuthError;

pub mod get_emoticon;
pub mod health;
pub mod issue_token;

/// Generic detail for every rejected token, regardless of which
/// validation check failed.
pub const UNAUTHORIZED_DETAIL: &str = "Could not validate credentials";

/// HTTP error response: a JSON body with a single `detail` field.
///
/// Unauthorized responses carry a `WWW-Authenticate: Bearer` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // One outward signal for every authentication failure kind;
            // the specific kind is logged where the failure occurs.
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::MalformedToken(_)
            | AuthError::ExpiredToken
            | AuthError::UnknownSubject(_) => {
                ApiError::Unauthorized(UNAUTHORIZED_DETAIL.to_string())
            }
            AuthError::PasswordHash(_) | AuthError::TokenGeneration(_) | AuthError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(detail) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({ "detail": detail })),
            )
                .into_response(),
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::InternalServerError(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": detail })),
            )
                .into_response(),
        }
    }
}
