//! Donation intake: validation, id assignment and recording.
//!
//! Submissions go through three ordered gates before anything is stored:
//! the amount check, the required identity fields, then the full shared
//! schema. The first failing gate decides the error.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use shared::{DonationSubmission, MIN_AMOUNT};

use crate::domain::commands::donations::{
    GetDonationCommand, GetDonationResult, GetStatsResult, SubmitDonationCommand, SubmitDonationResult,
};
use crate::domain::models::donation::{DomainDonation, DonationServiceError};
use crate::storage::DonationStorage;

pub const SUCCESS_MESSAGE: &str = "Donation submitted successfully";

#[derive(Clone)]
pub struct DonationService {
    storage: Arc<dyn DonationStorage>,
}

impl DonationService {
    pub fn new(storage: Arc<dyn DonationStorage>) -> Self {
        Self { storage }
    }

    pub async fn submit_donation(
        &self,
        command: SubmitDonationCommand,
    ) -> Result<SubmitDonationResult, DonationServiceError> {
        let submission = command.submission;
        check_preconditions(&submission)?;

        let validated = submission.into_validated().map_err(|validation| {
            warn!("Donation rejected with {} field error(s)", validation.errors.len());
            DonationServiceError::Validation(validation.errors)
        })?;

        let now = Utc::now();
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let id = DomainDonation::generate_id(millis, Uuid::new_v4());
        let created_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let donation = DomainDonation::accept(id, created_at, validated);

        self.storage.append(&donation).await?;
        info!(
            "Recorded donation {} ({} EUR, {}, {})",
            donation.id,
            donation.amount,
            donation.donation_type.as_str(),
            donation.cause.as_str()
        );

        Ok(SubmitDonationResult {
            donation,
            success_message: SUCCESS_MESSAGE.to_string(),
        })
    }

    pub async fn get_donation(
        &self,
        command: GetDonationCommand,
    ) -> Result<GetDonationResult, DonationServiceError> {
        match self.storage.find_by_id(&command.donation_id).await? {
            Some(donation) => Ok(GetDonationResult { donation }),
            None => Err(DonationServiceError::NotFound(command.donation_id)),
        }
    }

    pub async fn get_stats(&self) -> Result<GetStatsResult, DonationServiceError> {
        let aggregate = self.storage.aggregate().await?;
        Ok(GetStatsResult { aggregate })
    }
}

fn check_preconditions(submission: &DonationSubmission) -> Result<(), DonationServiceError> {
    let amount_ok = submission
        .amount
        .is_some_and(|amount| amount.is_finite() && amount >= MIN_AMOUNT);
    if !amount_ok {
        warn!("Donation rejected: invalid amount {:?}", submission.amount);
        return Err(DonationServiceError::InvalidAmount);
    }

    let required = [&submission.email, &submission.last_name, &submission.first_name];
    if required.iter().any(|value| value.trim().is_empty()) {
        warn!("Donation rejected: missing required fields");
        return Err(DonationServiceError::MissingRequiredFields);
    }

    Ok(())
}
