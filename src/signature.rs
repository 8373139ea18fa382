//! HMAC request signing for the Lalamove v2 APIs.
//!
//! Every request carries an `Authorization` header of the form:
//!
//! ```text
//! Authorization: hmac {api_key}:{timestamp}:{hex_signature}
//! ```
//!
//! where `timestamp` is Unix epoch **milliseconds** and the signature is
//! HMAC-SHA256, keyed by the account secret, over the canonical string:
//!
//! ```text
//! {timestamp}\r\n{METHOD}\r\n{PATH}\r\n\r\n{body}
//! ```
//!
//! The signature is a pure function of its inputs; callers obtain the
//! timestamp separately (see [`unix_timestamp_ms`]) so the same inputs at
//! the same timestamp always produce the same header.

/// Header carrying the HMAC signature.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header carrying the unique per-request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Header carrying the market code (see
/// [`CityCode::llm_country`](crate::domain::CityCode::llm_country)).
pub const MARKET_HEADER: &str = "X-LLM-Country";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verbs used by the v2 APIs. The verb is part of the signed canonical
/// string, so the set is closed here rather than free-form.
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    /// The verb exactly as it appears in the canonical string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Current Unix time in milliseconds.
pub fn unix_timestamp_ms() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Compute the hex-encoded HMAC-SHA256 signature for one request.
///
/// `path` is the URL path only (no scheme, host, or query); `body` is the
/// exact byte sequence that will be sent, empty for bodyless requests.
pub fn sign_request(
    secret: &str,
    timestamp_ms: i64,
    method: Method,
    path: &str,
    body: &[u8],
) -> String {
    let mut message =
        format!("{timestamp_ms}\r\n{}\r\n{path}\r\n\r\n", method.as_str()).into_bytes();
    message.extend_from_slice(body);
    let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA256, secret.as_bytes());
    let tag = ring::hmac::sign(&key, &message);
    hex_encode(tag.as_ref())
}

/// Assemble the full `Authorization` header value for one request.
pub fn authorization_header(
    api_key: &str,
    secret: &str,
    timestamp_ms: i64,
    method: Method,
    path: &str,
    body: &[u8],
) -> String {
    let signature = sign_request(secret, timestamp_ms, method, path, body);
    format!("hmac {api_key}:{timestamp_ms}:{signature}")
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "sekret-2024";
    const TIMESTAMP: i64 = 1_717_171_717_000;
    const BODY: &[u8] = br#"{"serviceType":"MOTORCYCLE"}"#;

    #[test]
    fn post_signature_matches_known_vector() {
        let signature = sign_request(SECRET, TIMESTAMP, Method::Post, "/v2/quotations", BODY);
        assert_eq!(
            signature,
            "1ba33b9a828c5e47c4dc4a687510ca54fb0945a426bf4eed0e5aa7c2b128395c"
        );
    }

    #[test]
    fn bodyless_get_signature_matches_known_vector() {
        let signature = sign_request(SECRET, TIMESTAMP, Method::Get, "/v2/orders/12345", b"");
        assert_eq!(
            signature,
            "ead1f8e6b0882ae531852c71e23bc2618cd006deb3fe828c46027610442a4fdc"
        );
    }

    #[test]
    fn signature_is_deterministic() {
        let first = sign_request(SECRET, TIMESTAMP, Method::Post, "/v2/quotations", BODY);
        let second = sign_request(SECRET, TIMESTAMP, Method::Post, "/v2/quotations", BODY);
        assert_eq!(first, second);
    }

    #[test]
    fn signature_depends_on_secret_and_timestamp() {
        let base = sign_request(SECRET, TIMESTAMP, Method::Post, "/v2/quotations", BODY);

        let other_secret =
            sign_request("other-secret", TIMESTAMP, Method::Post, "/v2/quotations", BODY);
        assert_eq!(
            other_secret,
            "7b5d208b5e8dfb508981a4e9cf980f56e41aa50e2ea2ae30cf7d8db6a0019342"
        );
        assert_ne!(base, other_secret);

        let other_timestamp =
            sign_request(SECRET, TIMESTAMP + 1, Method::Post, "/v2/quotations", BODY);
        assert_eq!(
            other_timestamp,
            "e9fc92cc0f50e73862f36dbadc9de8f447e52b9d3f58f2642a742408a19a2d8b"
        );
        assert_ne!(base, other_timestamp);
    }

    #[test]
    fn authorization_header_layout() {
        let header = authorization_header(
            "pk_test_fleet",
            SECRET,
            TIMESTAMP,
            Method::Post,
            "/v2/quotations",
            BODY,
        );
        assert_eq!(
            header,
            "hmac pk_test_fleet:1717171717000:\
             1ba33b9a828c5e47c4dc4a687510ca54fb0945a426bf4eed0e5aa7c2b128395c"
        );
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let signature = sign_request(SECRET, TIMESTAMP, Method::Get, "/v2/orders/12345", b"");
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }
}
