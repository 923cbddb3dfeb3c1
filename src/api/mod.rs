//! Client-side API operations for the relay and session stores

pub mod auth;
pub mod client;
mod jar;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use crate::auth::{issue_token_pair, IssuedToken, TOKEN_EXPIRY_DAYS};
use crate::config::{self, Config};
use crate::models::User;
use crate::store::AuthStore;

pub use client::ApiClient;

const RELAY_JAR: &str = "relay-cookies";

const TOKEN_EXPIRY_SECS: u64 = TOKEN_EXPIRY_DAYS * 24 * 60 * 60;

/// Relay client with the persisted cookie jar attached.
fn relay_client(config: &Config) -> Result<ApiClient> {
    ApiClient::with_jar_file(&config.api_base_url, config::store_path(RELAY_JAR)?)
}

/// Sign in: store a fresh token pair in relay cookies, update the local store.
pub async fn login(email: &str, username: Option<&str>, force: bool) -> Result<()> {
    let config = Config::from_env()?;
    let client = relay_client(&config)?;

    let mut store = AuthStore::load()?;
    if !force && store.is_authenticated && store.session.as_ref().is_some_and(|s| !s.is_expired()) {
        if let Some(user) = &store.user {
            println!("Already logged in as {}. Use --force for a new session.", user.email);
            return Ok(());
        }
    }

    // Placeholder credentials until a real credential service backs login
    let pair = issue_token_pair();
    let resp = auth::set_auth_tokens(&client, &pair.token, Some(&pair.refresh_token)).await;
    if !resp.success {
        bail!(
            "Login failed: {}",
            resp.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let username = username
        .map(str::to_string)
        .or_else(|| email.split('@').next().map(str::to_string))
        .unwrap_or_else(|| email.to_string());
    let user = User {
        id: format!("user-{}", Uuid::new_v4().simple()),
        email: email.to_string(),
        username,
    };

    let mirror = store.login(user);
    store.session = Some(IssuedToken::new(pair.token, Some(TOKEN_EXPIRY_SECS)));
    store.save()?;
    client.apply_set_cookie(&mirror);

    println!("Logged in as {}", email);
    Ok(())
}

/// Sign out: clear relay cookies and the local store.
pub async fn logout() -> Result<()> {
    let config = Config::from_env()?;
    let client = relay_client(&config)?;

    let resp = auth::clear_auth_tokens(&client).await;
    if !resp.success {
        // Cookies may already be gone; local state still gets cleared.
        tracing::warn!(
            "relay logout failed: {}",
            resp.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let mut store = AuthStore::load()?;
    let mirror = store.logout();
    store.save()?;
    client.apply_set_cookie(&mirror);

    println!("Logged out");
    Ok(())
}

/// Show relay cookie presence and the locally stored identity.
pub async fn status() -> Result<()> {
    let config = Config::from_env()?;
    let client = relay_client(&config)?;

    let status = auth::check_auth_status(&client).await;
    let store = AuthStore::load()?;

    println!("Authenticated: {}", status.authenticated);
    println!(
        "Refresh token: {}",
        if status.has_refresh_token { "present" } else { "absent" }
    );
    match store.user {
        Some(user) => println!("Signed in as:  {} <{}>", user.username, user.email),
        None => println!("Signed in as:  (nobody)"),
    }
    if store.session.is_some_and(|s| s.is_expired()) {
        println!("Session token expired locally; run 'gigdesk refresh'.");
    }

    Ok(())
}

/// Rotate the token pair once using the refresh cookie.
pub async fn refresh() -> Result<()> {
    let config = Config::from_env()?;
    let client = relay_client(&config)?;

    let resp = auth::refresh_auth_token(&client).await;
    if !resp.success {
        bail!(
            "Refresh failed: {}",
            resp.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    // The relay rotated the cookie values; locally only the lifetime is
    // tracked, so restamp the session record.
    let mut store = AuthStore::load()?;
    if let Some(session) = store.session.take() {
        store.session = Some(IssuedToken::new(session.token, Some(TOKEN_EXPIRY_SECS)));
        store.save()?;
    }

    println!("Tokens refreshed");
    Ok(())
}

/// Run the periodic token refresh until interrupted.
pub async fn watch(interval_minutes: u64) -> Result<()> {
    let config = Config::from_env()?;
    let client = relay_client(&config)?;

    tracing::info!(
        "refreshing every {} minute(s), press Ctrl-C to stop",
        interval_minutes
    );
    let handle = auth::spawn_token_refresh(client, interval_minutes);

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    handle.abort();

    Ok(())
}
