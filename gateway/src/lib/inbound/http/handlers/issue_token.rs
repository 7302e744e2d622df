use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::ports::IdentityServicePort;
use crate::inbound::http::router::AppState;

/// `POST /token`: exchange form-encoded credentials for a bearer token.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(body): Form<TokenRequestBody>,
) -> Result<Json<TokenResponseData>, ApiError> {
    let credentials = Credentials {
        username: body.username,
        password: body.password,
    };

    let user = state
        .identity
        .authenticate(&credentials)
        .await
        .map_err(|e| {
            tracing::warn!(username = %credentials.username, error = %e, "Login rejected");
            ApiError::from(e)
        })?;

    let access_token = state.identity.issue_token(&user, None).await.map_err(|e| {
        tracing::error!(username = %user.username, error = %e, "Token issuance failed");
        ApiError::from(e)
    })?;

    Ok(Json(TokenResponseData {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRequestBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}
