//! Share service — owner-facing share-link issuance orchestration.

use carlog_core::error::CarlogResult;
use carlog_core::repository::OwnershipVerifier;

use crate::codec;
use crate::config::ShareConfig;
use crate::token;

/// Input for the share-link creation flow.
#[derive(Debug)]
pub struct CreateShareLinkInput {
    /// Authenticated owner requesting the link.
    pub owner_id: String,
    pub car_id: String,
    /// Requested TTL; `None` uses the configured default. Clamped to
    /// the configured maximum either way.
    pub ttl_millis: Option<i64>,
}

/// A freshly created share link.
#[derive(Debug)]
pub struct ShareLinkOutput {
    /// Encoded token text (the share URL's path segment).
    pub token: String,
    /// Relative path to embed in the share URL.
    pub share_path: String,
    pub expires_at_millis: i64,
}

/// Share-link issuance service.
///
/// Generic over the ownership verifier so the share layer carries no
/// dependency on the authentication or storage crates.
pub struct ShareService<O: OwnershipVerifier> {
    ownership: O,
    config: ShareConfig,
}

impl<O: OwnershipVerifier> ShareService<O> {
    pub fn new(ownership: O, config: ShareConfig) -> Self {
        Self { ownership, config }
    }

    /// Create a share link for a car the caller owns.
    ///
    /// There is no revocation: once issued, a link stays resolvable
    /// until its expiry. The TTL clamp is the only mitigation, which
    /// is why it is enforced here rather than trusted to the caller.
    pub async fn create_share_link(
        &self,
        input: CreateShareLinkInput,
    ) -> CarlogResult<ShareLinkOutput> {
        // 1. Confirm the caller owns the car.
        self.ownership
            .verify_owner(&input.owner_id, &input.car_id)
            .await?;

        // 2. Clamp the TTL.
        let ttl_millis = input
            .ttl_millis
            .unwrap_or(self.config.default_ttl_millis)
            .min(self.config.max_ttl_millis);

        // 3. Issue and encode.
        let token = token::issue(&input.car_id, ttl_millis, &self.config)?;
        let encoded = codec::encode(&token);

        tracing::info!(
            car_id = %input.car_id,
            expires_at_millis = token.expires_at_millis,
            "share link issued"
        );

        Ok(ShareLinkOutput {
            share_path: format!("/share/{encoded}"),
            token: encoded,
            expires_at_millis: token.expires_at_millis,
        })
    }
}
