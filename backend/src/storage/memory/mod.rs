//! In-process storage. Contents are lost when the server stops.

mod donation_repository;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::models::donation::DomainDonation;
use crate::storage::Connection;

pub use donation_repository::MemoryDonationRepository;

/// Shared handle to the in-memory tables
#[derive(Clone, Default)]
pub struct MemoryConnection {
    donations: Arc<RwLock<Vec<DomainDonation>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    type DonationRepository = MemoryDonationRepository;

    fn create_donation_repository(&self) -> Self::DonationRepository {
        MemoryDonationRepository::new(Arc::clone(&self.donations))
    }
}
