use axum::Json;
use serde::Serialize;

/// `GET /`: unauthenticated liveness probe.
pub async fn health() -> Json<HealthResponseData> {
    Json(HealthResponseData { status: "ok" })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
}
