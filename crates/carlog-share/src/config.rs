//! Share-link configuration.

/// Configuration for the share-link token scheme.
///
/// The secret key is loaded once at process startup and held for the
/// process lifetime. It is never rotated mid-process and must never
/// be logged or echoed back.
#[derive(Clone)]
pub struct ShareConfig {
    /// HMAC-SHA256 key for token signing and verification.
    pub secret_key: Vec<u8>,
    /// TTL applied when the owner does not pick one
    /// (default: 604_800_000 = 7 days).
    pub default_ttl_millis: i64,
    /// Upper bound on any requested TTL
    /// (default: 2_592_000_000 = 30 days).
    pub max_ttl_millis: i64,
}

impl ShareConfig {
    pub fn new(secret_key: Vec<u8>) -> Self {
        Self {
            secret_key,
            default_ttl_millis: 604_800_000,
            max_ttl_millis: 2_592_000_000,
        }
    }
}

// Manual impl so the key bytes can never leak through `{:?}`.
impl std::fmt::Debug for ShareConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareConfig")
            .field("secret_key", &"<redacted>")
            .field("default_ttl_millis", &self.default_ttl_millis)
            .field("max_ttl_millis", &self.max_ttl_millis)
            .finish()
    }
}
