//! Share access gate — the only path from raw link text to car data.

use carlog_core::models::snapshot::PublicCarSnapshot;
use carlog_core::repository::SnapshotRepository;
use chrono::Utc;

use crate::config::ShareConfig;
use crate::error::ShareLinkError;
use crate::verify;

/// Resolves unauthenticated share-link requests.
///
/// Generic over the snapshot store so the token logic can be tested
/// with fakes and stays portable across storage backends.
pub struct ShareAccessGate<S: SnapshotRepository> {
    snapshots: S,
    config: ShareConfig,
}

impl<S: SnapshotRepository> ShareAccessGate<S> {
    pub fn new(snapshots: S, config: ShareConfig) -> Self {
        Self { snapshots, config }
    }

    /// Resolve share-link text to the public snapshot it grants.
    ///
    /// The snapshot is fetched exclusively by the car id extracted
    /// from the verified token — no query string, header, or other
    /// input can name a car here. Validity is checked once, up front;
    /// the expiry boundary passing while the fetch is in flight does
    /// not invalidate the read (all share access is read-only).
    ///
    /// Every call terminates in a snapshot or one of the two public
    /// error kinds. Internal distinctions (malformed vs. bad
    /// signature vs. not-yet-valid) all collapse to
    /// [`ShareLinkError::Invalid`].
    pub async fn resolve(&self, token_text: &str) -> Result<PublicCarSnapshot, ShareLinkError> {
        let now = Utc::now().timestamp_millis();
        let car_id = verify::verify(token_text, now, &self.config).map_err(|err| {
            tracing::debug!(kind = ?err, "share token rejected");
            ShareLinkError::from(err)
        })?;

        // The store read is scoped strictly to the verified car id. A
        // failure here (car deleted since issuance, backend trouble)
        // is indistinguishable from a bad link to the visitor.
        self.snapshots
            .public_snapshot(&car_id)
            .await
            .map_err(|err| {
                tracing::warn!(car_id = %car_id, error = %err, "share snapshot fetch failed");
                ShareLinkError::Invalid
            })
    }
}
