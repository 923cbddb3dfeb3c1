//! Relay errors mapped onto the response envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::{code, ApiResponse, ValidationError};

/// Errors a relay handler can reject a request with
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Token is required")]
    MissingToken,

    #[error("Invalid request")]
    MalformedPayload,
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingToken | RelayError::MalformedPayload => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope: ApiResponse<()> = match &self {
            RelayError::MissingToken => ApiResponse::validation_error(
                &self.to_string(),
                vec![ValidationError {
                    field: "token".to_string(),
                    rule: "required".to_string(),
                    message: self.to_string(),
                }],
            ),
            RelayError::MalformedPayload => {
                ApiResponse::error(code::BAD_REQUEST, "Bad Request", &self.to_string())
            }
        };

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_maps_to_validation_error() {
        let resp = RelayError::MissingToken.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let envelope: ApiResponse<()> = serde_json::from_slice(&body).unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.code, code::VALIDATION_ERROR);
        assert_eq!(envelope.errors.unwrap()[0].field, "token");
    }

    #[tokio::test]
    async fn test_malformed_payload_maps_to_bad_request() {
        let resp = RelayError::MalformedPayload.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let envelope: ApiResponse<()> = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.code, code::BAD_REQUEST);
    }
}
