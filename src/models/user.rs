//! User account model

use serde::{Deserialize, Serialize};

/// Authenticated user identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// Token cookie presence as reported by the relay.
///
/// Deliberately value-free: the relay never exposes what the cookies hold.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub authenticated: bool,
    pub has_refresh_token: bool,
}
