//! Seeded disputes and dispute eligibility

use std::sync::LazyLock;

use crate::models::{
    ActorRole, Dispute, DisputeComment, DisputeEvent, DisputeEventType, DisputeReason,
    DisputeStatus, Evidence, OfferStatus,
};

static DISPUTES: LazyLock<Vec<Dispute>> = LazyLock::new(|| {
    vec![
        Dispute {
            id: "dispute-1".to_string(),
            offer_id: "offer-1".to_string(),
            offer_title: "E-commerce Website Development".to_string(),
            freelancer_name: "John Developer".to_string(),
            reason: DisputeReason::QualityIssues,
            description: "The delivered work does not match the agreed specification. \
                          Several features are missing and the code quality is below a \
                          professional standard."
                .to_string(),
            status: DisputeStatus::Open,
            evidence: vec![Evidence {
                id: "ev-1".to_string(),
                name: "screenshot-bugs.png".to_string(),
                content_type: "image/png".to_string(),
                size: 245_000,
                uploaded_at: "2024-01-15T10:30:00Z".to_string(),
            }],
            events: vec![
                DisputeEvent {
                    id: "event-1".to_string(),
                    event_type: DisputeEventType::Created,
                    description: "Dispute opened by client".to_string(),
                    timestamp: "2024-01-15T10:00:00Z".to_string(),
                    actor: "You".to_string(),
                    actor_role: ActorRole::Client,
                },
                DisputeEvent {
                    id: "event-2".to_string(),
                    event_type: DisputeEventType::EvidenceAdded,
                    description: "Evidence file uploaded: screenshot-bugs.png".to_string(),
                    timestamp: "2024-01-15T10:30:00Z".to_string(),
                    actor: "You".to_string(),
                    actor_role: ActorRole::Client,
                },
            ],
            comments: vec![DisputeComment {
                id: "comment-1".to_string(),
                content: "Screenshots of the broken checkout flow are attached. The \
                          shopping cart does not work at all."
                    .to_string(),
                author: "You".to_string(),
                author_role: ActorRole::Client,
                timestamp: "2024-01-15T10:35:00Z".to_string(),
            }],
            created_at: "2024-01-15T10:00:00Z".to_string(),
            updated_at: "2024-01-15T10:00:00Z".to_string(),
            resolution: None,
        },
        Dispute {
            id: "dispute-2".to_string(),
            offer_id: "offer-2".to_string(),
            offer_title: "Mobile App UI Design".to_string(),
            freelancer_name: "Sarah Designer".to_string(),
            reason: DisputeReason::DeadlineMissed,
            description: "The project was not delivered by the agreed deadline and there \
                          was no prior communication about the delay."
                .to_string(),
            status: DisputeStatus::UnderReview,
            evidence: vec![
                Evidence {
                    id: "ev-2".to_string(),
                    name: "contract-agreement.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    size: 156_000,
                    uploaded_at: "2024-01-10T14:20:00Z".to_string(),
                },
                Evidence {
                    id: "ev-3".to_string(),
                    name: "chat-history.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    size: 89_000,
                    uploaded_at: "2024-01-10T14:25:00Z".to_string(),
                },
            ],
            events: vec![
                DisputeEvent {
                    id: "event-3".to_string(),
                    event_type: DisputeEventType::Created,
                    description: "Dispute opened by client".to_string(),
                    timestamp: "2024-01-10T14:00:00Z".to_string(),
                    actor: "You".to_string(),
                    actor_role: ActorRole::Client,
                },
                DisputeEvent {
                    id: "event-4".to_string(),
                    event_type: DisputeEventType::StatusChanged,
                    description: "Dispute status changed to Under Review".to_string(),
                    timestamp: "2024-01-11T09:00:00Z".to_string(),
                    actor: "Support Team".to_string(),
                    actor_role: ActorRole::Admin,
                },
            ],
            comments: vec![
                DisputeComment {
                    id: "comment-2".to_string(),
                    content: "The deadline was stated in the contract. I waited five extra \
                              days before opening this dispute."
                        .to_string(),
                    author: "You".to_string(),
                    author_role: ActorRole::Client,
                    timestamp: "2024-01-10T14:30:00Z".to_string(),
                },
                DisputeComment {
                    id: "comment-3".to_string(),
                    content: "Apologies for the delay; I should have communicated sooner."
                        .to_string(),
                    author: "Sarah Designer".to_string(),
                    author_role: ActorRole::Freelancer,
                    timestamp: "2024-01-11T16:00:00Z".to_string(),
                },
            ],
            created_at: "2024-01-10T14:00:00Z".to_string(),
            updated_at: "2024-01-12T09:30:00Z".to_string(),
            resolution: None,
        },
        Dispute {
            id: "dispute-3".to_string(),
            offer_id: "offer-3".to_string(),
            offer_title: "SEO Optimization Service".to_string(),
            freelancer_name: "Mike SEO Expert".to_string(),
            reason: DisputeReason::ScopeDisagreement,
            description: "Disagreement over which features were part of the original \
                          scope of work."
                .to_string(),
            status: DisputeStatus::Resolved,
            evidence: vec![],
            events: vec![
                DisputeEvent {
                    id: "event-5".to_string(),
                    event_type: DisputeEventType::Created,
                    description: "Dispute opened by client".to_string(),
                    timestamp: "2024-01-05T08:00:00Z".to_string(),
                    actor: "You".to_string(),
                    actor_role: ActorRole::Client,
                },
                DisputeEvent {
                    id: "event-6".to_string(),
                    event_type: DisputeEventType::Resolved,
                    description: "Dispute resolved, both parties agreed to split the \
                                  additional work cost"
                        .to_string(),
                    timestamp: "2024-01-08T16:45:00Z".to_string(),
                    actor: "Support Team".to_string(),
                    actor_role: ActorRole::Admin,
                },
            ],
            comments: vec![DisputeComment {
                id: "comment-4".to_string(),
                content: "The original agreement covered keyword research and on-page \
                          optimization, not link building."
                    .to_string(),
                author: "Mike SEO Expert".to_string(),
                author_role: ActorRole::Freelancer,
                timestamp: "2024-01-05T12:00:00Z".to_string(),
            }],
            created_at: "2024-01-05T08:00:00Z".to_string(),
            updated_at: "2024-01-08T16:45:00Z".to_string(),
            resolution: Some(
                "Both parties agreed to split the additional work cost. The client paid \
                 half of the extra amount and the freelancer completed the features."
                    .to_string(),
            ),
        },
    ]
});

/// Selectable dispute reason with display copy
#[derive(Debug, Clone, Copy)]
pub struct ReasonOption {
    pub value: DisputeReason,
    pub label: &'static str,
    pub description: &'static str,
}

const DISPUTE_REASONS: &[ReasonOption] = &[
    ReasonOption {
        value: DisputeReason::QualityIssues,
        label: "Quality Issues",
        description: "The delivered work does not meet the agreed quality standards",
    },
    ReasonOption {
        value: DisputeReason::DeadlineMissed,
        label: "Deadline Missed",
        description: "The project was not delivered by the agreed deadline",
    },
    ReasonOption {
        value: DisputeReason::CommunicationProblems,
        label: "Communication Problems",
        description: "The freelancer is unresponsive or difficult to communicate with",
    },
    ReasonOption {
        value: DisputeReason::PaymentDispute,
        label: "Payment Dispute",
        description: "There is a disagreement about payment terms or amounts",
    },
    ReasonOption {
        value: DisputeReason::ScopeDisagreement,
        label: "Scope Disagreement",
        description: "There is a misunderstanding about what the project included",
    },
    ReasonOption {
        value: DisputeReason::Other,
        label: "Other",
        description: "Another issue not listed above",
    },
];

/// All seeded disputes.
pub fn disputes() -> &'static [Dispute] {
    &DISPUTES
}

/// Dispute reason options for the dispute form.
pub fn dispute_reasons() -> &'static [ReasonOption] {
    DISPUTE_REASONS
}

/// Disputes attached to one offer.
pub fn disputes_by_offer(offer_id: &str) -> Vec<&'static Dispute> {
    DISPUTES.iter().filter(|d| d.offer_id == offer_id).collect()
}

/// Look up a dispute by its id.
pub fn dispute_by_id(dispute_id: &str) -> Option<&'static Dispute> {
    DISPUTES.iter().find(|d| d.id == dispute_id)
}

/// Whether a new dispute may be opened for an offer.
///
/// Only active, in-progress or completed offers qualify, and an offer with
/// an open or under-review dispute cannot get a second one.
pub fn is_offer_eligible_for_dispute(offer_id: &str, offer_status: OfferStatus) -> bool {
    let status_eligible = matches!(
        offer_status,
        OfferStatus::Active | OfferStatus::InProgress | OfferStatus::Completed
    );

    let has_open_dispute = DISPUTES.iter().any(|d| {
        d.offer_id == offer_id
            && matches!(d.status, DisputeStatus::Open | DisputeStatus::UnderReview)
    });

    status_eligible && !has_open_dispute
}

/// Offers selectable in the dispute form dropdown.
pub fn eligible_offers() -> &'static [(&'static str, &'static str)] {
    &[
        ("offer-4", "Logo Design Project"),
        ("offer-5", "Content Writing Service"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_dispute_blocks_new_dispute() {
        // offer-1 has an open dispute, offer-2 one under review.
        assert!(!is_offer_eligible_for_dispute("offer-1", OfferStatus::Active));
        assert!(!is_offer_eligible_for_dispute("offer-2", OfferStatus::InProgress));
    }

    #[test]
    fn test_resolved_dispute_does_not_block() {
        // offer-3's dispute is resolved, so a new one may be opened.
        assert!(is_offer_eligible_for_dispute("offer-3", OfferStatus::Completed));
    }

    #[test]
    fn test_ineligible_offer_status() {
        assert!(!is_offer_eligible_for_dispute("offer-9", OfferStatus::Cancelled));
        assert!(is_offer_eligible_for_dispute("offer-9", OfferStatus::Active));
    }

    #[test]
    fn test_disputes_by_offer_filters() {
        let found = disputes_by_offer("offer-2");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "dispute-2");
        assert!(disputes_by_offer("offer-404").is_empty());
    }

    #[test]
    fn test_dispute_lookup_by_id() {
        assert!(dispute_by_id("dispute-3").is_some());
        assert!(dispute_by_id("dispute-404").is_none());
    }

    #[test]
    fn test_reason_table_covers_all_variants() {
        assert_eq!(dispute_reasons().len(), 6);
    }
}
