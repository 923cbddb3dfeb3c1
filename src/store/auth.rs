//! Auth/session store with a plaintext mirror cookie
//!
//! Holds the signed-in identity for UI gating. `login`/`logout` return the
//! Set-Cookie value for the `auth-storage` mirror, which middleware reads
//! to gate routes; it carries only the authenticated flag, never tokens.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::auth::cookies::build_client_cookie;
use crate::auth::{IssuedToken, AUTH_STATE_COOKIE, TOKEN_EXPIRY_DAYS};
use crate::config;
use crate::models::User;

const STORE_NAME: &str = "auth-storage";

/// Client-side authentication state
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AuthStore {
    pub is_authenticated: bool,
    pub redirect_after_login: Option<String>,
    pub user: Option<User>,
    /// Local record of the last issued session token, for expiry checks.
    /// The relay's httpOnly cookie stays authoritative.
    pub session: Option<IssuedToken>,
}

impl AuthStore {
    /// Load the persisted store, or an empty one if none exists yet.
    pub fn load() -> Result<Self> {
        let path = config::store_path(STORE_NAME)?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).context("Failed to read auth store")?;
        toml::from_str(&content).context("Failed to parse auth store")
    }

    /// Persist the store to disk.
    pub fn save(&self) -> Result<()> {
        let dir = config::store_dir()?;
        fs::create_dir_all(&dir).context("Failed to create config directory")?;

        let path = config::store_path(STORE_NAME)?;
        let content = toml::to_string_pretty(self).context("Failed to serialize auth store")?;
        fs::write(&path, content).context("Failed to write auth store")?;

        // Identity data only, but still not world-readable
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, perms).context("Failed to set auth store permissions")?;
        }

        Ok(())
    }

    /// Sign in: set state and return the mirror cookie for middleware reads.
    pub fn login(&mut self, user: User) -> String {
        self.user = Some(user);
        self.is_authenticated = true;
        build_client_cookie(AUTH_STATE_COOKIE, &self.mirror_value(), TOKEN_EXPIRY_DAYS)
    }

    /// Sign out: clear state and return the mirror-deleting cookie.
    pub fn logout(&mut self) -> String {
        self.user = None;
        self.is_authenticated = false;
        self.redirect_after_login = None;
        self.session = None;
        build_client_cookie(AUTH_STATE_COOKIE, "", 0)
    }

    /// JSON payload mirrored into the `auth-storage` cookie.
    fn mirror_value(&self) -> String {
        serde_json::json!({ "state": { "isAuthenticated": self.is_authenticated } }).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "user-1".to_string(),
            email: "user@example.com".to_string(),
            username: "user".to_string(),
        }
    }

    #[test]
    fn test_login_sets_state_and_mirror() {
        let mut store = AuthStore::default();
        let cookie = store.login(test_user());

        assert!(store.is_authenticated);
        assert_eq!(store.user.as_ref().unwrap().email, "user@example.com");
        assert!(cookie.starts_with("auth-storage="));
        // The mirror is middleware-readable, so it must not be httpOnly.
        assert!(!cookie.contains("HttpOnly"));
        // And it carries the authenticated flag (percent-encoded JSON).
        assert!(cookie.contains("isAuthenticated"));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut store = AuthStore::default();
        store.login(test_user());
        store.redirect_after_login = Some("/dashboard".to_string());
        store.session = Some(IssuedToken::new("tok-x".to_string(), Some(3600)));

        let cookie = store.logout();
        assert!(!store.is_authenticated);
        assert!(store.user.is_none());
        assert!(store.redirect_after_login.is_none());
        assert!(store.session.is_none());
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_store_round_trips_through_toml() {
        let mut store = AuthStore::default();
        store.login(test_user());
        store.session = Some(IssuedToken::new("tok-x".to_string(), Some(3600)));

        let content = toml::to_string_pretty(&store).unwrap();
        let parsed: AuthStore = toml::from_str(&content).unwrap();
        assert!(parsed.is_authenticated);
        assert_eq!(parsed.user.unwrap().id, "user-1");
        assert_eq!(parsed.session.unwrap().token, "tok-x");
    }
}
