//! Share-link error types.
//!
//! Two layers: [`ShareTokenError`] is the internal taxonomy produced
//! by decoding and verification; [`ShareLinkError`] is the collapsed
//! pair of user-facing kinds the gate exposes. The collapse happens in
//! exactly one place (the `From` impl below) so a probing attacker can
//! never learn which internal check failed.

use carlog_core::error::CarlogError;
use thiserror::Error;

/// Internal verification outcome, never surfaced past the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShareTokenError {
    #[error("token text is malformed")]
    Malformed,

    #[error("token signature does not match")]
    SignatureMismatch,

    #[error("token is not yet valid")]
    NotYetValid,

    #[error("token has expired")]
    Expired,
}

/// User-facing share-link failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShareLinkError {
    #[error("this link is invalid")]
    Invalid,

    #[error("this link has expired")]
    Expired,
}

impl From<ShareTokenError> for ShareLinkError {
    fn from(err: ShareTokenError) -> Self {
        match err {
            ShareTokenError::Malformed
            | ShareTokenError::SignatureMismatch
            | ShareTokenError::NotYetValid => ShareLinkError::Invalid,
            ShareTokenError::Expired => ShareLinkError::Expired,
        }
    }
}

impl From<ShareLinkError> for CarlogError {
    fn from(err: ShareLinkError) -> Self {
        CarlogError::AuthorizationDenied {
            reason: err.to_string(),
        }
    }
}
