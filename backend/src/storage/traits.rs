//! # Storage Traits
//!
//! Storage abstractions the domain layer depends on. Implementations must be
//! safe to share across request handlers.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::donation::{DomainDonation, DonationAggregate};

/// Persistence for accepted donations
#[async_trait]
pub trait DonationStorage: Send + Sync {
    /// Append a donation. Ids are unique, so existing records are never replaced.
    async fn append(&self, donation: &DomainDonation) -> Result<()>;

    async fn find_by_id(&self, donation_id: &str) -> Result<Option<DomainDonation>>;

    /// Totals over every stored donation
    async fn aggregate(&self) -> Result<DonationAggregate>;
}

/// A storage backend able to hand out repositories
pub trait Connection: Send + Sync + Clone + 'static {
    type DonationRepository: DonationStorage;

    fn create_donation_repository(&self) -> Self::DonationRepository;
}
