//! Client-side operations against the secure auth relay
//!
//! Token values never reach this side: the relay keeps them in httpOnly
//! cookies and answers with success flags and presence booleans.

use std::time::Duration;

use serde_json::json;
use tokio::task::JoinHandle;

use super::client::ApiClient;
use crate::models::{ApiResponse, AuthStatus};

/// Outcome of a token operation
#[derive(Debug, Clone)]
pub struct TokenResponse {
    pub success: bool,
    pub error: Option<String>,
}

impl TokenResponse {
    fn from_envelope<T>(resp: &ApiResponse<T>) -> Self {
        Self {
            success: resp.ok,
            error: (!resp.ok).then(|| resp.message.clone()),
        }
    }
}

/// Store tokens in relay-managed httpOnly cookies.
pub async fn set_auth_tokens(
    client: &ApiClient,
    token: &str,
    refresh_token: Option<&str>,
) -> TokenResponse {
    let mut body = json!({ "token": token });
    if let Some(refresh_token) = refresh_token {
        body["refreshToken"] = json!(refresh_token);
    }

    let resp: ApiResponse<()> = client.post("/api/auth/token", Some(&body)).await;
    TokenResponse::from_envelope(&resp)
}

/// Check token cookie presence without exposing values.
///
/// Any failure reads as signed out.
pub async fn check_auth_status(client: &ApiClient) -> AuthStatus {
    let resp: ApiResponse<AuthStatus> = client.get("/api/auth/token").await;
    if resp.ok {
        resp.data.unwrap_or_default()
    } else {
        AuthStatus::default()
    }
}

/// Clear both auth cookies (logout).
pub async fn clear_auth_tokens(client: &ApiClient) -> TokenResponse {
    let resp: ApiResponse<()> = client.delete("/api/auth/token").await;
    TokenResponse::from_envelope(&resp)
}

/// Rotate the token pair using the refresh cookie.
pub async fn refresh_auth_token(client: &ApiClient) -> TokenResponse {
    let resp: ApiResponse<()> = client.post("/api/auth/refresh", None).await;
    TokenResponse::from_envelope(&resp)
}

/// Spawn the periodic best-effort token refresh.
///
/// Fires independently of user-initiated auth calls; a tick racing a
/// logout simply fails and is dropped. Abort the returned handle to stop
/// polling.
pub fn spawn_token_refresh(client: ApiClient, interval_minutes: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_minutes * 60));
        // The first tick completes immediately; skip it so the initial
        // refresh waits a full interval like every later one.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let status = check_auth_status(&client).await;
            if status.authenticated && status.has_refresh_token {
                let resp = refresh_auth_token(&client).await;
                if resp.success {
                    tracing::info!("token refresh succeeded");
                } else {
                    tracing::debug!(
                        "token refresh failed: {}",
                        resp.error.unwrap_or_else(|| "unknown error".to_string())
                    );
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::code;

    #[test]
    fn test_token_response_from_success_envelope() {
        let envelope: ApiResponse<()> = ApiResponse::success(code::SUCCESS, "OK", "stored", None);
        let resp = TokenResponse::from_envelope(&envelope);
        assert!(resp.success);
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_token_response_from_error_envelope() {
        let envelope: ApiResponse<()> =
            ApiResponse::error(code::UNAUTHORIZED, "Unauthorized", "No refresh token found");
        let resp = TokenResponse::from_envelope(&envelope);
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("No refresh token found"));
    }
}
