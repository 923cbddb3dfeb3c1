//! Freelancer profile model

use serde::{Deserialize, Serialize};

/// Freelancer profile as shown on marketplace cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    pub id: String,
    pub name: String,
    pub title: String,
    pub avatar: Option<String>,
    pub location: String,
    pub hourly_rate: f64,
    pub rating: f32,
    pub skills: Vec<String>,
    pub is_available: bool,
}
