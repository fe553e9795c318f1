use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::donation::{DomainDonation, DonationAggregate};
use crate::storage::DonationStorage;

/// Donations kept in insertion order behind a read/write lock
#[derive(Clone)]
pub struct MemoryDonationRepository {
    donations: Arc<RwLock<Vec<DomainDonation>>>,
}

impl MemoryDonationRepository {
    pub fn new(donations: Arc<RwLock<Vec<DomainDonation>>>) -> Self {
        Self { donations }
    }
}

#[async_trait]
impl DonationStorage for MemoryDonationRepository {
    async fn append(&self, donation: &DomainDonation) -> Result<()> {
        // Ids come from `DomainDonation::generate_id`, unique per call
        let mut donations = self.donations.write().await;
        donations.push(donation.clone());
        debug!("Stored donation {} ({} total)", donation.id, donations.len());
        Ok(())
    }

    async fn find_by_id(&self, donation_id: &str) -> Result<Option<DomainDonation>> {
        let donations = self.donations.read().await;
        Ok(donations.iter().find(|d| d.id == donation_id).cloned())
    }

    async fn aggregate(&self) -> Result<DonationAggregate> {
        let donations = self.donations.read().await;
        Ok(DonationAggregate::from_donations(donations.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryConnection;
    use crate::storage::Connection;
    use shared::{Cause, DonationSubmission, DonationType, PaymentMethod, Title};

    fn donation(id: &str, amount: f64, cause: Cause) -> DomainDonation {
        let submission = DonationSubmission {
            donation_type: DonationType::Ponctuel,
            amount: Some(amount),
            cause: Some(cause),
            title: Some(Title::MrMme),
            last_name: "Bernard".to_string(),
            first_name: "Lucie".to_string(),
            email: "lucie.bernard@example.fr".to_string(),
            phone: None,
            address: "8 Rue Victor Hugo".to_string(),
            address_complement: None,
            zip_code: "33000".to_string(),
            city: "Bordeaux".to_string(),
            country: "France".to_string(),
            organization: false,
            payment_method: Some(PaymentMethod::Cheque),
            cover_fees: false,
            how_did_you_know: None,
        };
        let validated = submission.into_validated().unwrap();
        DomainDonation::accept(id.to_string(), "2025-12-24T18:30:00.000Z".to_string(), validated)
    }

    #[tokio::test]
    async fn test_store_and_get() {
        let repo = MemoryConnection::new().create_donation_repository();
        let stored = donation("DON-1-a", 100.0, Cause::NoelPourTous);

        repo.append(&stored).await.unwrap();

        assert_eq!(repo.find_by_id("DON-1-a").await.unwrap(), Some(stored));
        assert_eq!(repo.find_by_id("DON-1-b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_same_millisecond_ids_stay_distinct() {
        let repo = MemoryConnection::new().create_donation_repository();
        let ids: Vec<String> = (0..50)
            .map(|_| DomainDonation::generate_id(1_766_600_000_000, uuid::Uuid::new_v4()))
            .collect();

        for (i, id) in ids.iter().enumerate() {
            repo.append(&donation(id, i as f64 + 1.0, Cause::NoelPourTous)).await.unwrap();
        }

        for (i, id) in ids.iter().enumerate() {
            let found = repo.find_by_id(id).await.unwrap().unwrap();
            assert_eq!(found.amount, i as f64 + 1.0);
        }
    }

    #[tokio::test]
    async fn test_repositories_share_connection() {
        let connection = MemoryConnection::new();
        let writer = connection.create_donation_repository();
        let reader = connection.create_donation_repository();

        writer.append(&donation("DON-1-a", 20.0, Cause::KitScolaire)).await.unwrap();
        writer.append(&donation("DON-2-b", 40.0, Cause::KitScolaire)).await.unwrap();

        let aggregate = reader.aggregate().await.unwrap();
        assert_eq!(aggregate.total_donations, 2);
        assert_eq!(aggregate.total_amount, 60.0);
        assert_eq!(aggregate.by_cause.get(&Cause::KitScolaire), Some(&2));
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let repo = MemoryConnection::new().create_donation_repository();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.append(&donation(&format!("DON-{i}-x"), 10.0, Cause::AideHivernale))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.aggregate().await.unwrap().total_donations, 20);
    }
}
