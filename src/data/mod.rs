//! Seeded catalog standing in for the marketplace backend
//!
//! Literal fixtures behind accessor functions. Shapes match what the
//! presentation layer consumes; nothing here is durable.

mod conversations;
mod disputes;
mod faq;
mod freelancers;
mod offers;
mod ratings;

pub use conversations::{conversations, messages_for};
pub use disputes::{
    dispute_by_id, dispute_reasons, disputes, disputes_by_offer, eligible_offers,
    is_offer_eligible_for_dispute, ReasonOption,
};
pub use faq::{faq_categories, faq_category};
pub use freelancers::{freelancer_by_id, freelancers};
pub use offers::{offer_by_id, offers};
pub use ratings::{
    add_client_rating, add_rating, client_rating_by_order, has_client_rating, rating_by_offer,
};
