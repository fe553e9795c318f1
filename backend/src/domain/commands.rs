//! Commands and results accepted by the domain services.
//!
//! The REST layer builds these from wire DTOs so the services never see HTTP types.

pub mod donations {
    use shared::DonationSubmission;

    use crate::domain::models::donation::{DomainDonation, DonationAggregate};

    /// Raw submission as received from the form
    #[derive(Debug, Clone)]
    pub struct SubmitDonationCommand {
        pub submission: DonationSubmission,
    }

    #[derive(Debug, Clone)]
    pub struct SubmitDonationResult {
        pub donation: DomainDonation,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct GetDonationCommand {
        pub donation_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct GetDonationResult {
        pub donation: DomainDonation,
    }

    #[derive(Debug, Clone)]
    pub struct GetStatsResult {
        pub aggregate: DonationAggregate,
    }
}
