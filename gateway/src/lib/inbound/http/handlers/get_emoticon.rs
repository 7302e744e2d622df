use axum::extract::Path;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Emoticons served to authenticated users.
const EMOTICONS: &[(&str, &str)] = &[
    ("example", "(^_^)"),
    ("shrug", r"¯\_(ツ)_/¯"),
    ("smile", ":-)"),
    ("wink", ";-)"),
    ("table_flip", "(╯°□°)╯︵ ┻━┻"),
];

/// `GET /emoticon/:name`: the protected resource.
///
/// Reachable only through the access gate, which binds the resolved
/// user into request extensions.
pub async fn get_emoticon(
    Path(name): Path<String>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<Json<EmoticonResponseData>, ApiError> {
    let emoticon = EMOTICONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, emoticon)| *emoticon)
        .ok_or_else(|| ApiError::NotFound(format!("No emoticon named {}", name)))?;

    Ok(Json(EmoticonResponseData {
        name,
        emoticon: emoticon.to_string(),
        requested_by: current_user.user.username,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmoticonResponseData {
    pub name: String,
    pub emoticon: String,
    pub requested_by: String,
}
