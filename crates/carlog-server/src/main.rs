//! CARLOG Server — Application entry point.

use tracing_subscriber::EnvFilter;

use carlog_share::{ShareAccessGate, ShareConfig, ShareService};
use carlog_store::MemoryStore;

/// Load the share-link secret key from the environment.
///
/// The key is read once at startup and held for the process lifetime;
/// it is never rotated mid-process and never logged.
fn load_share_secret() -> Result<Vec<u8>, String> {
    let raw = std::env::var("CARLOG_SHARE_SECRET")
        .map_err(|_| "CARLOG_SHARE_SECRET is not set".to_string())?;
    let key = hex::decode(raw.trim())
        .map_err(|_| "CARLOG_SHARE_SECRET is not valid hex".to_string())?;
    if key.len() < 32 {
        return Err("CARLOG_SHARE_SECRET must be at least 32 bytes".to_string());
    }
    Ok(key)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("carlog=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting CARLOG server...");

    let secret = match load_share_secret() {
        Ok(key) => key,
        Err(reason) => {
            tracing::error!(%reason, "share secret configuration failed");
            std::process::exit(1);
        }
    };

    let config = ShareConfig::new(secret);
    let store = MemoryStore::new();
    let _share_service = ShareService::new(store.clone(), config.clone());
    let _share_gate = ShareAccessGate::new(store, config);

    // TODO: Start REST API server (owner CRUD + GET /share/{token})

    tracing::info!("CARLOG server stopped.");
}
