//! HTTP Basic credential parsing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Credentials carried in an `Authorization: Basic <b64>` header.
///
/// This only parses the header; verifying the credential against a stored
/// account is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse a full `Authorization` header value. Returns `None` for any
    /// scheme other than `Basic` or any malformed payload.
    pub fn from_header(value: &str) -> Option<Self> {
        let (scheme, payload) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(payload.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (email, password) = decoded.split_once(':')?;
        if email.is_empty() {
            return None;
        }
        Some(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}
