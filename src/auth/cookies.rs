//! Set-Cookie construction and Cookie header parsing
//!
//! Token cookies always carry `Path=/; HttpOnly; SameSite=Lax`, plus
//! `Secure` when the relay runs in production. Values are percent-encoded
//! so arbitrary token payloads survive the header round trip.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in cookie values (the encodeURIComponent set).
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Cookie attributes for server-set token cookies.
pub fn secure_cookie_options(max_age_days: u64, secure: bool) -> String {
    let max_age = max_age_days * 24 * 60 * 60;
    let mut options = vec![
        format!("Max-Age={}", max_age),
        "Path=/".to_string(),
        "HttpOnly".to_string(),
        "SameSite=Lax".to_string(),
    ];

    // Secure requires HTTPS, so only production terminates TLS
    if secure {
        options.push("Secure".to_string());
    }

    options.join("; ")
}

/// Build a Set-Cookie header value for a token cookie.
pub fn build_secure_cookie(name: &str, value: &str, max_age_days: u64, secure: bool) -> String {
    let encoded = utf8_percent_encode(value, COOKIE_VALUE);
    format!("{}={}; {}", name, encoded, secure_cookie_options(max_age_days, secure))
}

/// Build a Set-Cookie header value that deletes a token cookie (expires immediately).
pub fn build_delete_cookie(name: &str, secure: bool) -> String {
    let mut options = vec![
        "Max-Age=0".to_string(),
        "Path=/".to_string(),
        "HttpOnly".to_string(),
        "SameSite=Lax".to_string(),
    ];

    if secure {
        options.push("Secure".to_string());
    }

    format!("{}=; {}", name, options.join("; "))
}

/// Build a Set-Cookie header value for a non-sensitive client-readable cookie.
///
/// Not httpOnly, so middleware and scripts can read it. Never use this for
/// token material.
pub fn build_client_cookie(name: &str, value: &str, max_age_days: u64) -> String {
    let max_age = max_age_days * 24 * 60 * 60;
    let encoded = utf8_percent_encode(value, COOKIE_VALUE);
    format!("{}={}; Max-Age={}; Path=/; SameSite=Lax", name, encoded, max_age)
}

/// Parse a Cookie request header into name/value pairs.
///
/// Pairs split on the first `=` so values containing `=` survive; values are
/// percent-decoded. Malformed pairs are skipped rather than failing the
/// request.
pub fn parse_cookies(header: Option<&str>) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    let Some(header) = header else {
        return cookies;
    };

    for pair in header.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name.is_empty() {
            continue;
        }

        let decoded = percent_decode_str(value)
            .decode_utf8()
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.to_string());
        cookies.insert(name.to_string(), decoded);
    }

    cookies
}
