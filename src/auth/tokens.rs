//! Token issuance and expiry bookkeeping

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token issued by the relay, with its expiry moment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Option<u64>,
}

impl IssuedToken {
    pub fn new(token: String, expires_in_secs: Option<u64>) -> Self {
        let expires_at = expires_in_secs.map(|secs| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs()
                + secs
        });

        Self { token, expires_at }
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(exp) => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap()
                    .as_secs();
                // Consider expired if less than 5 minutes remaining
                now + 300 >= exp
            }
            None => false,
        }
    }
}

/// Freshly rotated auth and refresh token values
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// Mint a synthetic token pair.
///
/// Stand-in for a real credential service: values are opaque placeholders
/// and nothing ever validates them beyond cookie presence.
pub fn issue_token_pair() -> TokenPair {
    TokenPair {
        token: format!("tok-{}", Uuid::new_v4().simple()),
        refresh_token: format!("rtk-{}", Uuid::new_v4().simple()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = IssuedToken::new("abc".to_string(), None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_expiry_margin() {
        // Expires in an hour: fine.
        let token = IssuedToken::new("abc".to_string(), Some(3600));
        assert!(!token.is_expired());

        // Expires in a minute: inside the 5-minute margin, treated as expired.
        let token = IssuedToken::new("abc".to_string(), Some(60));
        assert!(token.is_expired());
    }

    #[test]
    fn test_issue_token_pair_is_opaque_and_unique() {
        let a = issue_token_pair();
        let b = issue_token_pair();

        assert!(a.token.starts_with("tok-"));
        assert!(a.refresh_token.starts_with("rtk-"));
        assert_ne!(a.token, b.token);
        assert_ne!(a.refresh_token, b.refresh_token);
    }
}
