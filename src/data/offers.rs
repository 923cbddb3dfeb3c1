//! Seeded marketplace offers

use std::sync::LazyLock;

use crate::models::{Offer, OfferStatus};

fn offer(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    rating: f32,
    applicants: u32,
    posted_at: &str,
    status: OfferStatus,
) -> Offer {
    Offer {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        rating,
        applicants,
        posted_at: posted_at.to_string(),
        is_bookmarked: false,
        status,
    }
}

static OFFERS: LazyLock<Vec<Offer>> = LazyLock::new(|| {
    vec![
        offer(
            "offer-1",
            "E-commerce Website Development",
            "Brightline Retail",
            "Remote",
            4.8,
            24,
            "2024-01-02T09:00:00Z",
            OfferStatus::InProgress,
        ),
        offer(
            "offer-2",
            "Mobile App UI Design",
            "Nimbus Labs",
            "Berlin, Germany",
            4.6,
            31,
            "2024-01-04T12:00:00Z",
            OfferStatus::InProgress,
        ),
        offer(
            "offer-3",
            "SEO Optimization Service",
            "Harbor Media",
            "Remote",
            4.4,
            12,
            "2023-12-28T08:00:00Z",
            OfferStatus::Completed,
        ),
        offer(
            "offer-4",
            "Logo Design Project",
            "Foxglove Coffee",
            "Austin, TX",
            4.9,
            45,
            "2024-01-08T15:00:00Z",
            OfferStatus::Active,
        ),
        offer(
            "offer-5",
            "Content Writing Service",
            "Meridian Health",
            "Remote",
            4.7,
            18,
            "2024-01-10T11:00:00Z",
            OfferStatus::Completed,
        ),
    ]
});

/// All seeded offers, newest first.
pub fn offers() -> &'static [Offer] {
    &OFFERS
}

/// Look up an offer by its id.
pub fn offer_by_id(offer_id: &str) -> Option<&'static Offer> {
    OFFERS.iter().find(|o| o.id == offer_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_lookup() {
        assert_eq!(offer_by_id("offer-3").unwrap().status, OfferStatus::Completed);
        assert!(offer_by_id("offer-404").is_none());
    }
}
