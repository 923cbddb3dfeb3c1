//! Session cookie management for the marketplace auth relay
//!
//! Auth tokens live in httpOnly cookies issued by the relay endpoints;
//! clients only ever learn presence booleans, never token values. The
//! plaintext `auth-storage` cookie mirrors UI state for middleware reads
//! and carries nothing sensitive.

pub mod cookies;
pub mod tokens;

pub use cookies::{build_client_cookie, build_delete_cookie, build_secure_cookie, parse_cookies};
pub use tokens::{issue_token_pair, IssuedToken, TokenPair};

/// Cookie name for the short-lived auth token (httpOnly, set by the relay).
pub const AUTH_TOKEN_COOKIE: &str = "auth-token";

/// Cookie name for the long-lived refresh token (httpOnly, set by the relay).
pub const REFRESH_TOKEN_COOKIE: &str = "refresh-token";

/// Cookie name for the plaintext auth-state mirror readable by middleware.
pub const AUTH_STATE_COOKIE: &str = "auth-storage";

/// Default auth cookie lifetime in days.
pub const TOKEN_EXPIRY_DAYS: u64 = 7;

/// Refresh cookie lifetime in days.
pub const REFRESH_EXPIRY_DAYS: u64 = 30;
