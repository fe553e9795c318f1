//! # REST API for Donations
//!
//! Intake endpoint for the donation form plus lookup by id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use shared::{DonationRecord, DonationSubmission, SubmitDonationResponse};

use crate::domain::commands::donations::{GetDonationCommand, SubmitDonationCommand};
use crate::io::rest::error::{ApiError, ApiJson};
use crate::io::rest::mappers::DonationMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/donations", post(submit_donation))
        .route("/donations/:id", get(get_donation))
}

/// Validate and record a donation
pub async fn submit_donation(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<DonationSubmission>,
) -> Result<(StatusCode, Json<SubmitDonationResponse>), ApiError> {
    info!(
        "POST /api/donations - amount: {:?}, type: {}",
        submission.amount,
        submission.donation_type.as_str()
    );

    let command = SubmitDonationCommand { submission };
    let result = state.donation_service.submit_donation(command).await?;

    info!("POST /api/donations - created {}", result.donation.id);
    Ok((StatusCode::CREATED, Json(DonationMapper::to_submit_response(result))))
}

pub async fn get_donation(
    State(state): State<AppState>,
    Path(donation_id): Path<String>,
) -> Result<Json<DonationRecord>, ApiError> {
    info!("GET /api/donations/{}", donation_id);

    let command = GetDonationCommand { donation_id };
    let result = state.donation_service.get_donation(command).await?;
    Ok(Json(DonationMapper::to_dto(result.donation)))
}
