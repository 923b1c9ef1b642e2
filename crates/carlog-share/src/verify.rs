//! Share token verification.

use subtle::ConstantTimeEq;

use crate::codec;
use crate::config::ShareConfig;
use crate::error::ShareTokenError;
use crate::token;

/// Verify token text against the secret key and the given instant,
/// returning the verified car id.
///
/// Checks run in order: structure, temporal bounds, signature. The
/// temporal checks come first so a token whose window is long past
/// reports [`ShareTokenError::Expired`] regardless of what tag it
/// carries, and a forged future issued-at can never sidestep the
/// expiry logic. Any token inside its window with a tampered field
/// still fails the signature check.
///
/// Pure and deterministic given `(token_text, now_millis, key)`; no
/// I/O is performed.
pub fn verify(
    token_text: &str,
    now_millis: i64,
    config: &ShareConfig,
) -> Result<String, ShareTokenError> {
    let token = codec::decode(token_text)?;

    if now_millis < token.issued_at_millis {
        return Err(ShareTokenError::NotYetValid);
    }
    if now_millis >= token.expires_at_millis {
        return Err(ShareTokenError::Expired);
    }

    let expected = token::compute_tag(
        config,
        &token.car_id,
        token.issued_at_millis,
        token.expires_at_millis,
    )
    // HMAC-SHA256 accepts keys of any length; fail closed regardless.
    .map_err(|_| ShareTokenError::SignatureMismatch)?;

    // A presented tag that is not hex of the right length can never
    // equal a genuine one.
    let presented = hex::decode(&token.signature).map_err(|_| ShareTokenError::SignatureMismatch)?;

    // Constant-time comparison: never short-circuit on the first
    // differing byte.
    if bool::from(presented.ct_eq(&expected)) {
        Ok(token.car_id)
    } else {
        Err(ShareTokenError::SignatureMismatch)
    }
}
