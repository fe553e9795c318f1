use axum::{extract::State, response::Json};
use tracing::info;

use shared::DonationStats;

use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::DonationMapper;
use crate::AppState;

/// Aggregate over every donation recorded since startup
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DonationStats>, ApiError> {
    info!("GET /api/stats");

    let result = state.donation_service.get_stats().await?;
    Ok(Json(DonationMapper::to_stats(result.aggregate)))
}
