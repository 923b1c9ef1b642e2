//! Share token issuance and signing.

use carlog_core::error::{CarlogError, CarlogResult};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::ShareConfig;

type HmacSha256 = Hmac<Sha256>;

/// A stateless share-link capability token.
///
/// Immutable once issued; the validity window is fixed at issuance and
/// the signature covers every other field, so tampering with any one
/// of them invalidates the whole token. Never persisted — an expired
/// token simply stops verifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareToken {
    /// Opaque id of the car being shared. Non-empty.
    pub car_id: String,
    /// Issuance instant (epoch milliseconds).
    pub issued_at_millis: i64,
    /// Expiry instant (epoch milliseconds), strictly after issuance.
    pub expires_at_millis: i64,
    /// Lowercase hex HMAC-SHA256 tag over the canonical bytes of the
    /// other three fields.
    pub signature: String,
}

/// Fixed, unambiguous byte encoding of the signed triple.
///
/// The car id is length-prefixed and the timestamps are fixed-width,
/// so two distinct triples can never canonicalize to the same bytes.
pub(crate) fn canonical_bytes(
    car_id: &str,
    issued_at_millis: i64,
    expires_at_millis: i64,
) -> Vec<u8> {
    let id = car_id.as_bytes();
    let mut buf = Vec::with_capacity(4 + id.len() + 16);
    buf.extend_from_slice(&(id.len() as u32).to_be_bytes());
    buf.extend_from_slice(id);
    buf.extend_from_slice(&issued_at_millis.to_be_bytes());
    buf.extend_from_slice(&expires_at_millis.to_be_bytes());
    buf
}

/// Raw HMAC-SHA256 tag over the canonical triple.
pub(crate) fn compute_tag(
    config: &ShareConfig,
    car_id: &str,
    issued_at_millis: i64,
    expires_at_millis: i64,
) -> CarlogResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(&config.secret_key)
        .map_err(|e| CarlogError::Crypto(format!("bad share key: {e}")))?;
    mac.update(&canonical_bytes(car_id, issued_at_millis, expires_at_millis));
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Hex tag for a (car id, window) triple.
pub fn sign(
    config: &ShareConfig,
    car_id: &str,
    issued_at_millis: i64,
    expires_at_millis: i64,
) -> CarlogResult<String> {
    compute_tag(config, car_id, issued_at_millis, expires_at_millis).map(hex::encode)
}

/// Issue a signed share token for `car_id`, valid for `ttl_millis`
/// from now.
///
/// The caller is responsible for having authenticated the owner and
/// confirmed ownership of `car_id`; this function only reads the
/// clock and the secret key. No state is persisted or mutated.
pub fn issue(car_id: &str, ttl_millis: i64, config: &ShareConfig) -> CarlogResult<ShareToken> {
    if car_id.is_empty() {
        return Err(CarlogError::Validation {
            message: "car id must not be empty".into(),
        });
    }
    if ttl_millis <= 0 {
        return Err(CarlogError::Validation {
            message: "share TTL must be positive".into(),
        });
    }

    let issued_at_millis = Utc::now().timestamp_millis();
    let expires_at_millis = issued_at_millis + ttl_millis;
    let signature = sign(config, car_id, issued_at_millis, expires_at_millis)?;

    Ok(ShareToken {
        car_id: car_id.to_string(),
        issued_at_millis,
        expires_at_millis,
        signature,
    })
}
