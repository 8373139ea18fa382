use serde::Deserialize;

use crate::transport::TransportError;

#[derive(Debug, Deserialize)]
struct ErrorJsonResponse {
    // The server reports its error code in `message`.
    #[serde(default)]
    message: String,
}

/// Decode the error payload of a 402/409 response into the raw server code.
///
/// A payload without a `message` field decodes to an empty code, which the
/// taxonomy maps to the generic unknown error.
pub fn decode_error_code(json: &str) -> Result<String, TransportError> {
    let parsed: ErrorJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.message)
}
