use axum::response::Json;
use chrono::{SecondsFormat, Utc};
use tracing::debug;

use shared::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    debug!("GET /api/health");
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
