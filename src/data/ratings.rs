//! Seeded ratings
//!
//! The one mutable part of the catalog: submitting a rating inserts into
//! the in-memory maps, keyed by offer (freelancer ratings) and order
//! (client ratings).

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use crate::models::{ClientRating, FreelancerRating};

static RATINGS: LazyLock<RwLock<HashMap<String, FreelancerRating>>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "offer-5".to_string(),
        FreelancerRating {
            id: "rating-1".to_string(),
            offer_id: "offer-5".to_string(),
            freelancer_id: "fl-5".to_string(),
            freelancer_name: "Alex Writer".to_string(),
            client_id: "client-1".to_string(),
            rating: 5,
            comment: "Excellent work. High-quality content, delivered on time, and very \
                      responsive to feedback."
                .to_string(),
            created_at: "2026-01-05T14:30:00Z".to_string(),
        },
    );
    RwLock::new(map)
});

static CLIENT_RATINGS: LazyLock<RwLock<HashMap<String, ClientRating>>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "order-3".to_string(),
        ClientRating {
            id: "client-rating-1".to_string(),
            order_id: "order-3".to_string(),
            client_id: "client-emily".to_string(),
            client_name: "Emily Rodriguez".to_string(),
            service_id: "service-1".to_string(),
            service_title: "Professional React Web Development".to_string(),
            rating: 5,
            comment: "A fantastic client: clear requirements, quick responses and prompt \
                      payment."
                .to_string(),
            created_at: "2024-11-25T10:00:00Z".to_string(),
        },
    );
    RwLock::new(map)
});

/// Freelancer rating left for an offer, if any.
pub fn rating_by_offer(offer_id: &str) -> Option<FreelancerRating> {
    RATINGS.read().expect("ratings lock poisoned").get(offer_id).cloned()
}

/// Record a freelancer rating, replacing any prior rating for the offer.
pub fn add_rating(rating: FreelancerRating) {
    RATINGS
        .write()
        .expect("ratings lock poisoned")
        .insert(rating.offer_id.clone(), rating);
}

/// Client rating left for an order, if any.
pub fn client_rating_by_order(order_id: &str) -> Option<ClientRating> {
    CLIENT_RATINGS
        .read()
        .expect("ratings lock poisoned")
        .get(order_id)
        .cloned()
}

/// Whether the client of an order has been rated yet.
pub fn has_client_rating(order_id: &str) -> bool {
    CLIENT_RATINGS
        .read()
        .expect("ratings lock poisoned")
        .contains_key(order_id)
}

/// Record a client rating, replacing any prior rating for the order.
pub fn add_client_rating(rating: ClientRating) {
    CLIENT_RATINGS
        .write()
        .expect("ratings lock poisoned")
        .insert(rating.order_id.clone(), rating);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rating_lookup() {
        let rating = rating_by_offer("offer-5").unwrap();
        assert_eq!(rating.rating, 5);
        assert!(rating_by_offer("offer-404").is_none());
    }

    #[test]
    fn test_add_rating_inserts_and_replaces() {
        let rating = FreelancerRating {
            id: "rating-t1".to_string(),
            offer_id: "offer-t1".to_string(),
            freelancer_id: "fl-t1".to_string(),
            freelancer_name: "Test Freelancer".to_string(),
            client_id: "client-t1".to_string(),
            rating: 3,
            comment: "Fine".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        };
        add_rating(rating.clone());
        assert_eq!(rating_by_offer("offer-t1").unwrap().rating, 3);

        add_rating(FreelancerRating { rating: 4, ..rating });
        assert_eq!(rating_by_offer("offer-t1").unwrap().rating, 4);
    }

    #[test]
    fn test_client_rating_presence() {
        assert!(has_client_rating("order-3"));
        assert!(!has_client_rating("order-404"));
        assert_eq!(
            client_rating_by_order("order-3").unwrap().client_name,
            "Emily Rodriguez"
        );
    }
}
