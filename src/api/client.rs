//! HTTP client for the marketplace API
//!
//! Wraps reqwest::Client and normalizes every failure mode into the
//! standard response envelope, so callers never handle a raw transport
//! error. Relay cookies are carried through the attached jar.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::Method;
use serde::de::DeserializeOwned;

use super::jar::CookieJar;
use crate::models::{code, ApiResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the relay and catalog endpoints
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    jar: Arc<Mutex<CookieJar>>,
}

impl ApiClient {
    /// Client with a process-local cookie jar.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_cookie_jar(base_url, CookieJar::in_memory())
    }

    /// Client whose cookie jar persists at the given path.
    pub fn with_jar_file(base_url: impl Into<String>, path: PathBuf) -> Result<Self> {
        Ok(Self::with_cookie_jar(base_url, CookieJar::load(path)?))
    }

    fn with_cookie_jar(base_url: impl Into<String>, jar: CookieJar) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            jar: Arc::new(Mutex::new(jar)),
        }
    }

    /// Record a Set-Cookie value as if the relay had sent it.
    pub fn apply_set_cookie(&self, header: &str) {
        let mut jar = self.jar.lock().expect("cookie jar lock poisoned");
        jar.apply_set_cookie(header);
        if let Err(err) = jar.persist() {
            tracing::warn!("failed to persist cookie jar: {:#}", err);
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResponse<T> {
        self.request(Method::POST, path, body).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResponse<T> {
        self.request(Method::PUT, path, body).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResponse<T> {
        self.request(Method::PATCH, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::DELETE, path, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResponse<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .timeout(DEFAULT_TIMEOUT)
            .header(ACCEPT, "application/json");

        if let Some(cookie) = self.jar.lock().expect("cookie jar lock poisoned").header() {
            request = request.header(COOKIE, cookie);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                return error_response(408, "Timeout", "Request timeout");
            }
            Err(err) => {
                return error_response(0, "Network Error", &err.to_string());
            }
        };

        // Record relay cookies before the body consumes the response.
        {
            let mut jar = self.jar.lock().expect("cookie jar lock poisoned");
            let mut changed = false;
            for value in response.headers().get_all(SET_COOKIE) {
                if let Ok(value) = value.to_str() {
                    jar.apply_set_cookie(value);
                    changed = true;
                }
            }
            if changed {
                if let Err(err) = jar.persist() {
                    tracing::warn!("failed to persist cookie jar: {:#}", err);
                }
            }
        }

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return error_response(status.as_u16(), "Request Failed", &err.to_string()),
        };

        if !status.is_success() {
            // Prefer the server's own envelope when the error body carries one.
            if let Some(envelope) = ApiResponse::from_json(&body) {
                return envelope;
            }
            let reason = status.canonical_reason().unwrap_or("Request Failed");
            return error_response(status.as_u16(), "Request Failed", reason);
        }

        if !is_json || body.is_empty() {
            return ApiResponse::success(
                code::NO_CONTENT,
                "Success",
                "Request completed successfully",
                None,
            );
        }

        match ApiResponse::from_json(&body) {
            Some(envelope) => envelope,
            None => error_response(status.as_u16(), "Request Failed", "Malformed response body"),
        }
    }
}

/// Synthesize an error envelope for a failure without one.
fn error_response<T>(status: u16, title: &str, message: &str) -> ApiResponse<T> {
    let code = if status >= 500 { code::SERVER_ERROR } else { code::BAD_REQUEST };
    ApiResponse::error(code, title, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_code_selection() {
        let resp: ApiResponse<()> = error_response(502, "Request Failed", "bad gateway");
        assert_eq!(resp.code, code::SERVER_ERROR);
        assert!(!resp.ok);

        let resp: ApiResponse<()> = error_response(404, "Request Failed", "not found");
        assert_eq!(resp.code, code::BAD_REQUEST);

        // Network-level failures (no HTTP status) count as client-side.
        let resp: ApiResponse<()> = error_response(0, "Network Error", "connection refused");
        assert_eq!(resp.code, code::BAD_REQUEST);
        assert_eq!(resp.title, "Network Error");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
