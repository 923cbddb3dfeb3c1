//! Standard API response envelope
//!
//! Every relay endpoint and the client wrapper speak this one shape, so
//! callers always get `ok`, a numeric code, and a human-readable title and
//! message, whatever happened on the wire.

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response kind indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
    Warning,
}

/// Per-field validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,
    /// Rule that failed, e.g. "required", "minLength"
    pub rule: String,
    /// Human-readable message
    pub message: String,
}

/// Pagination and context metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

/// Response codes carried in the envelope.
///
/// 1000-1999 success, 2000-2999 warnings, 4000-4999 client errors,
/// 5000-5999 server errors.
pub mod code {
    pub const SUCCESS: u16 = 1000;
    pub const CREATED: u16 = 1001;
    pub const UPDATED: u16 = 1002;
    pub const DELETED: u16 = 1003;
    pub const NO_CONTENT: u16 = 1004;

    pub const WARNING_PARTIAL: u16 = 2000;

    pub const BAD_REQUEST: u16 = 4000;
    pub const VALIDATION_ERROR: u16 = 4001;
    pub const UNAUTHORIZED: u16 = 4010;
    pub const FORBIDDEN: u16 = 4030;
    pub const NOT_FOUND: u16 = 4040;
    pub const CONFLICT: u16 = 4090;
    pub const RATE_LIMITED: u16 = 4290;

    pub const SERVER_ERROR: u16 = 5000;
}

/// Standard API response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub ok: bool,
    /// Numeric status code, see [`code`]
    pub code: u16,
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    /// Short title describing the result
    pub title: String,
    /// Detailed message for the user
    pub message: String,
    /// Response payload (None on error)
    pub data: Option<T>,
    /// Validation failures (None on success)
    pub errors: Option<Vec<ValidationError>>,
    #[serde(default)]
    pub meta: ResponseMeta,
    /// ISO 8601 timestamp
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<T> ApiResponse<T> {
    pub fn success(code: u16, title: &str, message: &str, data: Option<T>) -> Self {
        Self {
            ok: true,
            code,
            response_type: ResponseType::Success,
            title: title.to_string(),
            message: message.to_string(),
            data,
            errors: None,
            meta: ResponseMeta::default(),
            timestamp: now_iso8601(),
            trace_id: None,
        }
    }

    pub fn error(code: u16, title: &str, message: &str) -> Self {
        Self {
            ok: false,
            code,
            response_type: ResponseType::Error,
            title: title.to_string(),
            message: message.to_string(),
            data: None,
            errors: None,
            meta: ResponseMeta::default(),
            timestamp: now_iso8601(),
            trace_id: None,
        }
    }

    pub fn validation_error(message: &str, errors: Vec<ValidationError>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::error(code::VALIDATION_ERROR, "Validation Failed", message)
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parse an envelope from a raw response body.
    pub fn from_json(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(code::SUCCESS, "OK", "done", Some(42));
        assert!(resp.ok);
        assert_eq!(resp.code, 1000);
        assert_eq!(resp.data, Some(42));
        assert!(resp.errors.is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let resp: ApiResponse<()> = ApiResponse::error(code::UNAUTHORIZED, "Unauthorized", "no");
        assert!(!resp.ok);
        assert_eq!(resp.code, 4010);
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let resp: ApiResponse<()> = ApiResponse::validation_error(
            "fix the fields",
            vec![ValidationError {
                field: "email".to_string(),
                rule: "required".to_string(),
                message: "Email is required".to_string(),
            }],
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], 4001);
        assert_eq!(json["errors"][0]["field"], "email");
        assert!(json.get("timestamp").is_some());
        // Optional trace id stays off the wire when unset.
        assert!(json.get("traceId").is_none());
    }

    #[test]
    fn test_envelope_round_trip() {
        let resp = ApiResponse::success(code::CREATED, "Created", "made it", Some("x".to_string()));
        let bytes = serde_json::to_vec(&resp).unwrap();
        let parsed: ApiResponse<String> = ApiResponse::from_json(&bytes).unwrap();
        assert!(parsed.ok);
        assert_eq!(parsed.code, code::CREATED);
        assert_eq!(parsed.data.as_deref(), Some("x"));
    }
}
