//! Client-side form validation

mod auth;
mod offer;

pub use auth::{validate_login_form, validate_register_form, AuthFormErrors, LoginForm, RegisterForm};
pub use offer::{categories, validate_offer_form, Category, OfferForm, OfferFormErrors};
