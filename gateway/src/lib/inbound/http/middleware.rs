use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::UNAUTHORIZED_DETAIL;
use crate::domain::identity::models::UserRecord;
use crate::domain::identity::ports::IdentityServicePort;
use crate::inbound::http::router::AppState;

/// Request extension carrying the user resolved from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserRecord,
}

/// Access gate for protected routes.
///
/// A missing or non-Bearer Authorization header is rejected before the
/// validator runs. Every rejection is the same generic 401; which check
/// failed is visible only in the logs.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user = state.identity.validate_token(token).await.map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let value = header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    let (scheme, token) = value.split_once(' ').ok_or_else(|| {
        tracing::warn!("Authorization header has no credential after the scheme");
        unauthorized()
    })?;

    // Scheme names are case-insensitive (RFC 7235)
    if !scheme.eq_ignore_ascii_case("bearer") {
        tracing::warn!("Authorization header is not a Bearer credential");
        return Err(unauthorized());
    }

    Ok(token)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED_DETAIL.to_string()).into_response()
}
