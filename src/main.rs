//! Application shell: startup wiring only.
//!
//! Loads configuration, establishes the store connection, and restores any
//! persisted session. A connectivity failure here is fatal. The
//! presentation layer lives outside this crate; it builds its use-case
//! handlers from the gateway and session-store handles prepared here.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use patient_portal::adapters::{FileSessionStore, MySqlDataGateway};
use patient_portal::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = patient_portal::config::AppConfig::load()?;
    config.validate()?;

    let gateway = match MySqlDataGateway::connect(&config.database).await {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            // Startup cannot continue without the store.
            tracing::error!(error = %e, "could not connect to the practice database");
            std::process::exit(1);
        }
    };
    tracing::info!("connected to the practice database");

    let session_store = Arc::new(FileSessionStore::new(&config.session.file_path));
    if let Some(session) = session_store.load().await? {
        if session.keep_logged_in() {
            tracing::info!("restored a persisted session");
        }
    }

    // Hand the gateway and session store to the presentation layer.
    run_presentation(gateway, session_store);
    Ok(())
}

/// Seam for the out-of-scope presentation layer.
fn run_presentation(_gateway: Arc<MySqlDataGateway>, _session_store: Arc<FileSessionStore>) {
    tracing::info!("core services ready; handing over to the presentation layer");
}
