//! Marketplace offer models

use serde::{Deserialize, Serialize};

/// Offer lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Active,
    InProgress,
    Completed,
    Cancelled,
}

/// Posted offer as shown in marketplace listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub rating: f32,
    pub applicants: u32,
    pub posted_at: String,
    pub is_bookmarked: bool,
    pub status: OfferStatus,
}
