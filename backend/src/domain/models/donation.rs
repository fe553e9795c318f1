use std::collections::BTreeMap;

use shared::{
    Cause, DonationStatus, DonationType, DonationValidationError, PaymentMethod, Title, ValidatedDonation,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct DomainDonor {
    pub title: Title,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub address: String,
    pub address_complement: Option<String>,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub phone: Option<String>,
    pub organization: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainPayment {
    pub method: PaymentMethod,
    pub cover_fees: bool,
}

/// A donation accepted by the intake service
#[derive(Debug, Clone, PartialEq)]
pub struct DomainDonation {
    pub id: String,
    pub donation_type: DonationType,
    pub amount: f64,
    pub cause: Cause,
    pub donor: DomainDonor,
    pub payment: DomainPayment,
    pub how_did_you_know: Option<String>,
    pub created_at: String,
    pub status: DonationStatus,
}

impl DomainDonation {
    /// "DON-<epoch_millis>-<uuid v4 as 32 hex chars>"
    pub fn generate_id(now_millis: u64, suffix: Uuid) -> String {
        format!("DON-{}-{}", now_millis, suffix.simple())
    }

    /// Build the stored record for a validated submission. New records are always pending.
    pub fn accept(id: String, created_at: String, donation: ValidatedDonation) -> Self {
        Self {
            id,
            donation_type: donation.donation_type,
            amount: donation.amount,
            cause: donation.cause,
            donor: DomainDonor {
                title: donation.title,
                last_name: donation.last_name,
                first_name: donation.first_name,
                email: donation.email,
                address: donation.address,
                address_complement: donation.address_complement,
                zip_code: donation.zip_code,
                city: donation.city,
                country: donation.country,
                phone: donation.phone,
                organization: donation.organization,
            },
            payment: DomainPayment {
                method: donation.payment_method,
                cover_fees: donation.cover_fees,
            },
            how_did_you_know: donation.how_did_you_know,
            created_at,
            status: DonationStatus::Pending,
        }
    }
}

/// Totals over every stored donation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationAggregate {
    pub total_donations: usize,
    pub total_amount: f64,
    pub ponctuel_count: usize,
    pub regulier_count: usize,
    pub by_cause: BTreeMap<Cause, usize>,
}

impl DonationAggregate {
    pub fn from_donations<'a>(donations: impl IntoIterator<Item = &'a DomainDonation>) -> Self {
        donations.into_iter().fold(Self::default(), |mut aggregate, donation| {
            aggregate.total_donations += 1;
            aggregate.total_amount += donation.amount;
            match donation.donation_type {
                DonationType::Ponctuel => aggregate.ponctuel_count += 1,
                DonationType::Regulier => aggregate.regulier_count += 1,
            }
            *aggregate.by_cause.entry(donation.cause).or_insert(0) += 1;
            aggregate
        })
    }

    /// Mean amount rounded to cents, 0 when nothing is stored
    pub fn average_donation(&self) -> f64 {
        if self.total_donations == 0 {
            return 0.0;
        }
        let average = self.total_amount / self.total_donations as f64;
        (average * 100.0).round() / 100.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DonationServiceError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Missing required fields")]
    MissingRequiredFields,
    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<DonationValidationError>),
    #[error("Donation not found: {0}")]
    NotFound(String),
    #[error("Storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}
