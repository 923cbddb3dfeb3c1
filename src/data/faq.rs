//! Seeded FAQ catalog

use std::sync::LazyLock;

use crate::models::{FaqCategory, FaqItem};

fn item(id: &str, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

static CATEGORIES: LazyLock<Vec<FaqCategory>> = LazyLock::new(|| {
    vec![
        FaqCategory {
            id: "general".to_string(),
            name: "General Questions".to_string(),
            icon: "help-circle".to_string(),
            items: vec![
                item(
                    "general-1",
                    "What is GigDesk?",
                    "GigDesk is a freelance marketplace that connects clients with \
                     talented freelancers worldwide, with escrowed payments and built-in \
                     dispute resolution.",
                ),
                item(
                    "general-2",
                    "How do I get started?",
                    "Create an account, complete your profile, and start browsing offers \
                     or posting projects. The onboarding guide walks you through each \
                     step.",
                ),
                item(
                    "general-3",
                    "Is GigDesk free to use?",
                    "Creating an account and browsing is free. A small service fee is \
                     charged only when a project completes successfully.",
                ),
            ],
        },
        FaqCategory {
            id: "payments".to_string(),
            name: "Payments & Billing".to_string(),
            icon: "credit-card".to_string(),
            items: vec![
                item(
                    "payments-1",
                    "How do escrow payments work?",
                    "When a client funds a project the payment is held in escrow. Funds \
                     are released to the freelancer when milestones are approved or the \
                     project is completed, protecting both parties.",
                ),
                item(
                    "payments-2",
                    "What are the platform fees?",
                    "A competitive 5% service fee applies to completed projects. It \
                     covers platform maintenance and dispute resolution services.",
                ),
                item(
                    "payments-3",
                    "How quickly can I withdraw my earnings?",
                    "Once funds are released from escrow they are immediately available \
                     for withdrawal.",
                ),
            ],
        },
        FaqCategory {
            id: "security".to_string(),
            name: "Security & Privacy".to_string(),
            icon: "shield".to_string(),
            items: vec![
                item(
                    "security-1",
                    "How is my personal information protected?",
                    "All personal data is stored encrypted and never shared with third \
                     parties without explicit consent.",
                ),
                item(
                    "security-2",
                    "What happens if there's a dispute?",
                    "Neutral arbitrators review evidence from both parties. Escrowed \
                     funds stay held until the dispute is resolved, ensuring a fair \
                     outcome for everyone.",
                ),
                item(
                    "security-3",
                    "How do you verify freelancer identities?",
                    "Freelancers can earn an optional verification badge by completing \
                     an identity check, giving clients extra assurance on sensitive \
                     projects.",
                ),
            ],
        },
        FaqCategory {
            id: "technical".to_string(),
            name: "Technical Support".to_string(),
            icon: "settings".to_string(),
            items: vec![
                item(
                    "technical-1",
                    "I can't sign in. What should I do?",
                    "Check that your session has not expired and try signing in again. \
                     If the problem persists, clear your cookies and contact support.",
                ),
                item(
                    "technical-2",
                    "Which browsers are supported?",
                    "Current versions of Chrome, Firefox and Edge are fully supported. \
                     Keep your browser updated for the best experience.",
                ),
            ],
        },
    ]
});

/// All FAQ categories in display order.
pub fn faq_categories() -> &'static [FaqCategory] {
    &CATEGORIES
}

/// Look up a category by its id.
pub fn faq_category(id: &str) -> Option<&'static FaqCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_seeded() {
        let categories = faq_categories();
        assert_eq!(categories.len(), 4);
        assert!(categories.iter().all(|c| !c.items.is_empty()));
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(faq_category("payments").unwrap().name, "Payments & Billing");
        assert!(faq_category("nonsense").is_none());
    }
}
