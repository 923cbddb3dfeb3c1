//! Session relay and catalog route handlers
//!
//! The auth endpoints manage two httpOnly cookies and never expose token
//! values. Any invalid refresh state results in full cookie clearance;
//! no partial-failure state is retained.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::error::RelayError;
use super::AppState;
use crate::auth::{
    build_delete_cookie, build_secure_cookie, issue_token_pair, parse_cookies, AUTH_TOKEN_COOKIE,
    REFRESH_EXPIRY_DAYS, REFRESH_TOKEN_COOKIE, TOKEN_EXPIRY_DAYS,
};
use crate::data;
use crate::models::{code, ApiResponse, AuthStatus, Dispute, FaqCategory};

/// POST /api/auth/token request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

fn set_cookie_headers(cookies: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        if let Ok(value) = cookie.parse() {
            headers.append(SET_COOKIE, value);
        }
    }
    headers
}

fn request_cookies(headers: &HeaderMap) -> std::collections::HashMap<String, String> {
    parse_cookies(headers.get(COOKIE).and_then(|v| v.to_str().ok()))
}

/// POST /api/auth/token - store tokens in httpOnly cookies.
pub async fn token_post(
    State(state): State<AppState>,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Response, RelayError> {
    let Json(body) = body.map_err(|_| RelayError::MalformedPayload)?;

    let Some(token) = body.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
        return Err(RelayError::MissingToken);
    };

    let secure = state.env.is_production();
    let mut cookies = vec![build_secure_cookie(
        AUTH_TOKEN_COOKIE,
        token,
        TOKEN_EXPIRY_DAYS,
        secure,
    )];

    // Refresh token is optional and gets the longer lifetime
    if let Some(refresh) = body.refresh_token.as_deref().filter(|t| !t.is_empty()) {
        cookies.push(build_secure_cookie(
            REFRESH_TOKEN_COOKIE,
            refresh,
            REFRESH_EXPIRY_DAYS,
            secure,
        ));
    }

    let envelope: ApiResponse<()> = ApiResponse::success(
        code::SUCCESS,
        "Tokens Stored",
        "Authentication tokens were stored",
        None,
    );
    Ok((set_cookie_headers(&cookies), Json(envelope)).into_response())
}

/// GET /api/auth/token - report cookie presence without exposing values.
pub async fn token_get(headers: HeaderMap) -> Response {
    let cookies = request_cookies(&headers);

    let status = AuthStatus {
        authenticated: cookies.get(AUTH_TOKEN_COOKIE).is_some_and(|v| !v.is_empty()),
        has_refresh_token: cookies.get(REFRESH_TOKEN_COOKIE).is_some_and(|v| !v.is_empty()),
    };

    Json(ApiResponse::success(
        code::SUCCESS,
        "Auth Status",
        "Token presence reported",
        Some(status),
    ))
    .into_response()
}

/// DELETE /api/auth/token - clear both token cookies (logout).
pub async fn token_delete(State(state): State<AppState>) -> Response {
    let secure = state.env.is_production();
    let cookies = [
        build_delete_cookie(AUTH_TOKEN_COOKIE, secure),
        build_delete_cookie(REFRESH_TOKEN_COOKIE, secure),
    ];

    let envelope: ApiResponse<()> = ApiResponse::success(
        code::DELETED,
        "Logged Out",
        "Authentication cookies cleared",
        None,
    );
    (set_cookie_headers(&cookies), Json(envelope)).into_response()
}

/// POST /api/auth/refresh - rotate both tokens, or clear everything.
pub async fn refresh_post(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let secure = state.env.is_production();
    let cookies = request_cookies(&headers);

    let has_refresh = cookies.get(REFRESH_TOKEN_COOKIE).is_some_and(|v| !v.is_empty());
    if !has_refresh {
        let cleared = [
            build_delete_cookie(AUTH_TOKEN_COOKIE, secure),
            build_delete_cookie(REFRESH_TOKEN_COOKIE, secure),
        ];
        let envelope: ApiResponse<()> =
            ApiResponse::error(code::UNAUTHORIZED, "Unauthorized", "No refresh token found");
        return (
            StatusCode::UNAUTHORIZED,
            set_cookie_headers(&cleared),
            Json(envelope),
        )
            .into_response();
    }

    // Synthetic rotation until a real credential service backs this
    let pair = issue_token_pair();
    let rotated = [
        build_secure_cookie(AUTH_TOKEN_COOKIE, &pair.token, TOKEN_EXPIRY_DAYS, secure),
        build_secure_cookie(REFRESH_TOKEN_COOKIE, &pair.refresh_token, REFRESH_EXPIRY_DAYS, secure),
    ];

    let envelope: ApiResponse<()> = ApiResponse::success(
        code::UPDATED,
        "Token Refreshed",
        "Token refreshed successfully",
        None,
    );
    (set_cookie_headers(&rotated), Json(envelope)).into_response()
}

/// GET /api/offers - list seeded offers.
pub async fn offers_get() -> Response {
    let offers = data::offers().to_vec();
    Json(ApiResponse::success(code::SUCCESS, "Offers", "Offer listing", Some(offers)))
        .into_response()
}

/// GET /api/freelancers - list seeded freelancer profiles.
pub async fn freelancers_get() -> Response {
    let freelancers = data::freelancers().to_vec();
    Json(ApiResponse::success(
        code::SUCCESS,
        "Freelancers",
        "Freelancer listing",
        Some(freelancers),
    ))
    .into_response()
}

/// GET /api/disputes query parameters
#[derive(Debug, Deserialize)]
pub struct DisputeQuery {
    pub offer: Option<String>,
}

/// GET /api/disputes - list disputes, optionally for one offer.
pub async fn disputes_get(Query(query): Query<DisputeQuery>) -> Response {
    let disputes: Vec<Dispute> = match query.offer.as_deref() {
        Some(offer_id) => data::disputes_by_offer(offer_id).into_iter().cloned().collect(),
        None => data::disputes().to_vec(),
    };

    Json(ApiResponse::success(code::SUCCESS, "Disputes", "Dispute listing", Some(disputes)))
        .into_response()
}

/// GET /api/faq query parameters
#[derive(Debug, Deserialize)]
pub struct FaqQuery {
    pub category: Option<String>,
}

/// GET /api/faq - list FAQ categories, or a single one.
pub async fn faq_get(Query(query): Query<FaqQuery>) -> Response {
    let categories: Vec<FaqCategory> = match query.category.as_deref() {
        Some(id) => match data::faq_category(id) {
            Some(category) => vec![category.clone()],
            None => {
                let envelope: ApiResponse<()> = ApiResponse::error(
                    code::NOT_FOUND,
                    "Not Found",
                    &format!("Unknown FAQ category '{}'", id),
                );
                return (StatusCode::NOT_FOUND, Json(envelope)).into_response();
            }
        },
        None => data::faq_categories().to_vec(),
    };

    Json(ApiResponse::success(code::SUCCESS, "FAQ", "FAQ categories", Some(categories)))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunEnv;

    fn dev_state() -> AppState {
        AppState { env: RunEnv::Development }
    }

    fn prod_state() -> AppState {
        AppState { env: RunEnv::Production }
    }

    fn set_cookies(resp: &Response) -> Vec<String> {
        resp.headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    async fn envelope<T: serde::de::DeserializeOwned>(resp: Response) -> ApiResponse<T> {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn token_request(token: Option<&str>, refresh: Option<&str>) -> TokenRequest {
        TokenRequest {
            token: token.map(str::to_string),
            refresh_token: refresh.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_token_post_sets_both_cookies() {
        let resp = token_post(
            State(dev_state()),
            Ok(Json(token_request(Some("tok-1"), Some("rtk-1")))),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let cookies = set_cookies(&resp);
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with("auth-token=tok-1;"));
        assert!(cookies[0].contains("Max-Age=604800"));
        assert!(cookies[0].contains("HttpOnly"));
        assert!(cookies[1].starts_with("refresh-token=rtk-1;"));
        assert!(cookies[1].contains("Max-Age=2592000"));
    }

    #[tokio::test]
    async fn test_token_post_without_refresh_sets_one_cookie() {
        let resp = token_post(State(dev_state()), Ok(Json(token_request(Some("tok-1"), None))))
            .await
            .unwrap();

        let cookies = set_cookies(&resp);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("auth-token="));
    }

    #[tokio::test]
    async fn test_token_post_requires_token() {
        let err = token_post(State(dev_state()), Ok(Json(token_request(None, None))))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::MissingToken));

        let err = token_post(State(dev_state()), Ok(Json(token_request(Some("  "), None))))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::MissingToken));
    }

    #[tokio::test]
    async fn test_token_post_production_marks_cookies_secure() {
        let resp = token_post(State(prod_state()), Ok(Json(token_request(Some("t"), None))))
            .await
            .unwrap();
        assert!(set_cookies(&resp)[0].ends_with("; Secure"));
    }

    #[tokio::test]
    async fn test_token_get_reports_presence_only() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "auth-token=abc".parse().unwrap());

        let resp = token_get(headers).await;
        let envelope: ApiResponse<AuthStatus> = envelope(resp).await;
        let status = envelope.data.unwrap();
        assert!(status.authenticated);
        assert!(!status.has_refresh_token);
    }

    #[tokio::test]
    async fn test_token_get_empty_cookie_counts_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "auth-token=; refresh-token=xyz".parse().unwrap());

        let resp = token_get(headers).await;
        let envelope: ApiResponse<AuthStatus> = envelope(resp).await;
        let status = envelope.data.unwrap();
        assert!(!status.authenticated);
        assert!(status.has_refresh_token);
    }

    #[tokio::test]
    async fn test_token_delete_always_clears_both() {
        let resp = token_delete(State(dev_state())).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookies = set_cookies(&resp);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
        assert!(cookies.iter().any(|c| c.starts_with("auth-token=;")));
        assert!(cookies.iter().any(|c| c.starts_with("refresh-token=;")));
    }

    #[tokio::test]
    async fn test_refresh_without_token_clears_everything() {
        let resp = refresh_post(State(dev_state()), HeaderMap::new()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let cookies = set_cookies(&resp);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));

        let envelope: ApiResponse<()> = envelope(resp).await;
        assert_eq!(envelope.code, code::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_refresh_rotates_both_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "refresh-token=rtk-old".parse().unwrap());

        let resp = refresh_post(State(dev_state()), headers).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookies = set_cookies(&resp);
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with("auth-token=tok-"));
        assert!(cookies[1].starts_with("refresh-token=rtk-"));
        // Rotation must not hand back the old refresh token.
        assert!(!cookies[1].contains("rtk-old"));
    }

    #[tokio::test]
    async fn test_faq_unknown_category_is_404() {
        let resp = faq_get(Query(FaqQuery { category: Some("nope".to_string()) })).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_disputes_filtered_by_offer() {
        let resp = disputes_get(Query(DisputeQuery { offer: Some("offer-1".to_string()) })).await;
        let envelope: ApiResponse<Vec<Dispute>> = envelope(resp).await;
        let disputes = envelope.data.unwrap();
        assert_eq!(disputes.len(), 1);
        assert_eq!(disputes[0].offer_id, "offer-1");
    }
}
