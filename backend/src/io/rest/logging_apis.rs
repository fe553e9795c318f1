use axum::response::Json;
use tracing::{debug, error, info, warn};

use shared::{LogRequest, LogResponse};

use crate::io::rest::error::{ApiError, ApiJson};

/// Re-emit a frontend log line through the server's subscriber
pub async fn log_message(ApiJson(request): ApiJson<LogRequest>) -> Result<Json<LogResponse>, ApiError> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "warn" | "warning" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Ok(Json(LogResponse { success: true }))
}
