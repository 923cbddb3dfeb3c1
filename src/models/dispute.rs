//! Dispute models
//!
//! Disputes attach to an offer and carry an evidence list, an event
//! timeline, and a comment thread. No transactional escrow logic backs
//! them here; they are display data served by the catalog.

use serde::{Deserialize, Serialize};

/// Dispute lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    UnderReview,
    Resolved,
    Closed,
}

/// Why the dispute was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeReason {
    QualityIssues,
    DeadlineMissed,
    CommunicationProblems,
    PaymentDispute,
    ScopeDisagreement,
    Other,
}

/// Who performed a dispute action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Client,
    Freelancer,
    Admin,
}

/// Uploaded evidence file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
    pub uploaded_at: String,
}

/// Kind of timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeEventType {
    Created,
    EvidenceAdded,
    StatusChanged,
    CommentAdded,
    Resolved,
}

/// Timeline entry on a dispute
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: DisputeEventType,
    pub description: String,
    pub timestamp: String,
    pub actor: String,
    pub actor_role: ActorRole,
}

/// Comment on a dispute thread
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeComment {
    pub id: String,
    pub content: String,
    pub author: String,
    pub author_role: ActorRole,
    pub timestamp: String,
}

/// Dispute opened against an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    pub offer_id: String,
    pub offer_title: String,
    pub freelancer_name: String,
    pub reason: DisputeReason,
    pub description: String,
    pub status: DisputeStatus,
    pub evidence: Vec<Evidence>,
    pub events: Vec<DisputeEvent>,
    pub comments: Vec<DisputeComment>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}
