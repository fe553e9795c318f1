use std::collections::BTreeMap;

use shared::{DonationRecord, DonationStats, DonationTypeCounts, Donor, PaymentDetails, SubmitDonationResponse};

use crate::domain::commands::donations::SubmitDonationResult;
use crate::domain::models::donation::{DomainDonation, DonationAggregate};

pub struct DonationMapper;

impl DonationMapper {
    /// Convert a domain donation to the wire record
    pub fn to_dto(domain: DomainDonation) -> DonationRecord {
        DonationRecord {
            id: domain.id,
            donation_type: domain.donation_type,
            amount: domain.amount,
            cause: domain.cause,
            donor: Donor {
                title: domain.donor.title,
                last_name: domain.donor.last_name,
                first_name: domain.donor.first_name,
                email: domain.donor.email,
                address: domain.donor.address,
                address_complement: domain.donor.address_complement,
                zip_code: domain.donor.zip_code,
                city: domain.donor.city,
                country: domain.donor.country,
                phone: domain.donor.phone,
                organization: domain.donor.organization,
            },
            payment: PaymentDetails {
                method: domain.payment.method,
                cover_fees: domain.payment.cover_fees,
            },
            how_did_you_know: domain.how_did_you_know,
            created_at: domain.created_at,
            status: domain.status,
        }
    }

    pub fn to_submit_response(result: SubmitDonationResult) -> SubmitDonationResponse {
        SubmitDonationResponse {
            success: true,
            message: result.success_message,
            donation_id: result.donation.id.clone(),
            donation: Self::to_dto(result.donation),
        }
    }

    /// Causes are keyed by their wire id; causes with no donation are absent
    pub fn to_stats(aggregate: DonationAggregate) -> DonationStats {
        let by_cause: BTreeMap<String, usize> = aggregate
            .by_cause
            .iter()
            .map(|(cause, count)| (cause.as_str().to_string(), *count))
            .collect();

        DonationStats {
            total_donations: aggregate.total_donations,
            total_amount: aggregate.total_amount,
            average_donation: aggregate.average_donation(),
            by_type: DonationTypeCounts {
                ponctuel: aggregate.ponctuel_count,
                regulier: aggregate.regulier_count,
            },
            by_cause,
        }
    }
}
