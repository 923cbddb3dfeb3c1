//! Rating models
//!
//! Ratings go both ways: clients rate freelancers per offer, freelancers
//! rate clients per order.

use serde::{Deserialize, Serialize};

/// Client's rating of a freelancer for a completed offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerRating {
    pub id: String,
    pub offer_id: String,
    pub freelancer_id: String,
    pub freelancer_name: String,
    pub client_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

/// Freelancer's rating of a client for a completed order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRating {
    pub id: String,
    pub order_id: String,
    pub client_id: String,
    pub client_name: String,
    pub service_id: String,
    pub service_title: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}
