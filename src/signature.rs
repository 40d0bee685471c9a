//! HMAC-SHA256 URL signer
//!
//! Secure sources sign every generated URL so the CDN can reject requests
//! whose path or transformation parameters were tampered with. The payload is
//! the decoded salt, a `/`, the normalized (unencoded) resource path and, when
//! present, a `?` plus the already-encoded query string. The digest is
//! base64url-encoded without padding and attached as the trailing `signature`
//! parameter.

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};
use crate::source::Source;

type HmacSha256 = Hmac<Sha256>;

// Secrets are configured as standard base64, with or without padding.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Generates the signature token for a path and optional encoded query.
///
/// Deterministic: identical secrets, path and query always produce the same
/// token. Fails only when the configured secrets are missing or not valid
/// base64.
pub fn generate(source: &Source, path: &str, encoded_query: Option<&str>) -> Result<String> {
    let key = decode_secret(source.secure_key.as_deref(), "secure_key")?;
    let salt = decode_secret(source.secure_salt.as_deref(), "secure_salt")?;

    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC can take key of any size");
    mac.update(&salt);
    mac.update(b"/");
    mac.update(path.as_bytes());
    if let Some(query) = encoded_query {
        mac.update(b"?");
        mac.update(query.as_bytes());
    }

    Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

fn decode_secret(secret: Option<&str>, field: &str) -> Result<Vec<u8>> {
    let secret = secret
        .ok_or_else(|| Error::InvalidSecret(format!("{} is not configured", field)))?;
    STANDARD_LENIENT
        .decode(secret)
        .map_err(|e| Error::InvalidSecret(format!("{} is not valid base64: {}", field, e)))
}
