//! New-offer form validation

use chrono::{Local, NaiveDate};

const MIN_TITLE_LENGTH: usize = 10;
const MIN_DESCRIPTION_LENGTH: usize = 50;
const MIN_BUDGET: f64 = 10.0;

/// Raw new-offer form input
#[derive(Debug, Clone, Default)]
pub struct OfferForm {
    pub title: String,
    pub description: String,
    /// Budget in USD, as typed
    pub budget: String,
    pub category: String,
    /// Deadline date, `YYYY-MM-DD`
    pub deadline: String,
}

/// Per-field validation messages; `None` means the field passed
#[derive(Debug, Default, PartialEq)]
pub struct OfferFormErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<String>,
}

impl OfferFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.budget.is_none()
            && self.category.is_none()
            && self.deadline.is_none()
    }
}

/// Selectable offer category
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub value: &'static str,
    pub label: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { value: "web-development", label: "Web Development" },
    Category { value: "mobile-development", label: "Mobile Development" },
    Category { value: "design", label: "Design & Creative" },
    Category { value: "writing", label: "Writing & Translation" },
    Category { value: "marketing", label: "Marketing & Sales" },
    Category { value: "video", label: "Video & Animation" },
    Category { value: "music", label: "Music & Audio" },
    Category { value: "data", label: "Data & Analytics" },
    Category { value: "other", label: "Other" },
];

/// Offer categories in display order.
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Validate a new-offer form. Today counts as a valid deadline.
pub fn validate_offer_form(form: &OfferForm) -> OfferFormErrors {
    let mut errors = OfferFormErrors::default();

    if form.title.trim().is_empty() {
        errors.title = Some("Title is required".to_string());
    } else if form.title.chars().count() < MIN_TITLE_LENGTH {
        errors.title = Some(format!("Title must be at least {} characters", MIN_TITLE_LENGTH));
    }

    if form.description.trim().is_empty() {
        errors.description = Some("Description is required".to_string());
    } else if form.description.chars().count() < MIN_DESCRIPTION_LENGTH {
        errors.description = Some(format!(
            "Description must be at least {} characters",
            MIN_DESCRIPTION_LENGTH
        ));
    }

    if form.budget.trim().is_empty() {
        errors.budget = Some("Budget is required".to_string());
    } else {
        match form.budget.trim().parse::<f64>() {
            Ok(budget) if budget >= MIN_BUDGET => {}
            _ => errors.budget = Some(format!("Budget must be at least ${}", MIN_BUDGET as u64)),
        }
    }

    if form.category.is_empty() {
        errors.category = Some("Please select a category".to_string());
    } else if !CATEGORIES.iter().any(|c| c.value == form.category) {
        errors.category = Some("Please select a valid category".to_string());
    }

    if form.deadline.is_empty() {
        errors.deadline = Some("Deadline is required".to_string());
    } else {
        match NaiveDate::parse_from_str(&form.deadline, "%Y-%m-%d") {
            Ok(deadline) => {
                let today = Local::now().date_naive();
                if deadline < today {
                    errors.deadline = Some("Deadline must be in the future".to_string());
                }
            }
            Err(_) => errors.deadline = Some("Deadline must be a valid date".to_string()),
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_form() -> OfferForm {
        OfferForm {
            title: "Build a marketing site".to_string(),
            description: "We need a five-page marketing site with a contact form, \
                          a blog and basic analytics wired up."
                .to_string(),
            budget: "500".to_string(),
            category: "web-development".to_string(),
            deadline: (Local::now().date_naive() + Duration::days(14))
                .format("%Y-%m-%d")
                .to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_offer_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_short_title_rejected() {
        let form = OfferForm { title: "Too short".to_string(), ..valid_form() };
        let errors = validate_offer_form(&form);
        assert_eq!(errors.title.as_deref(), Some("Title must be at least 10 characters"));
    }

    #[test]
    fn test_short_description_rejected() {
        let form = OfferForm { description: "Not nearly long enough".to_string(), ..valid_form() };
        let errors = validate_offer_form(&form);
        assert!(errors.description.unwrap().contains("at least 50 characters"));
    }

    #[test]
    fn test_budget_rules() {
        let form = OfferForm { budget: "9.99".to_string(), ..valid_form() };
        assert!(validate_offer_form(&form).budget.is_some());

        let form = OfferForm { budget: "ten dollars".to_string(), ..valid_form() };
        assert!(validate_offer_form(&form).budget.is_some());

        let form = OfferForm { budget: "10".to_string(), ..valid_form() };
        assert!(validate_offer_form(&form).budget.is_none());

        let form = OfferForm { budget: String::new(), ..valid_form() };
        assert_eq!(validate_offer_form(&form).budget.as_deref(), Some("Budget is required"));
    }

    #[test]
    fn test_category_must_be_known() {
        let form = OfferForm { category: String::new(), ..valid_form() };
        assert!(validate_offer_form(&form).category.is_some());

        let form = OfferForm { category: "quantum-computing".to_string(), ..valid_form() };
        assert!(validate_offer_form(&form).category.is_some());
    }

    #[test]
    fn test_deadline_rules() {
        // Today is acceptable.
        let form = OfferForm {
            deadline: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ..valid_form()
        };
        assert!(validate_offer_form(&form).deadline.is_none());

        // Yesterday is not.
        let form = OfferForm {
            deadline: (Local::now().date_naive() - Duration::days(1))
                .format("%Y-%m-%d")
                .to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate_offer_form(&form).deadline.as_deref(),
            Some("Deadline must be in the future")
        );

        // Garbage dates are rejected rather than silently accepted.
        let form = OfferForm { deadline: "soonish".to_string(), ..valid_form() };
        assert!(validate_offer_form(&form).deadline.is_some());
    }
}
