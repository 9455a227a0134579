mod actions;
mod api;
mod config;
mod errors;
mod export;
mod jobs;
mod notify;
mod session;
mod settings;
mod state;

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::api::HttpJobBoardApi;
use crate::config::Config;
use crate::notify::Notifier;
use crate::session::{Session, UserProfile};
use crate::settings::manager::SettingsManager;
use crate::state::AppState;

/// Diagnostic entry point: wires the real HTTP adapter, runs one settings
/// sync for the configured account, and prints the merged document.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job-board client v{}", env!("CARGO_PKG_VERSION"));

    let api = Arc::new(HttpJobBoardApi::new(&config));
    info!("API adapter initialized for {}", config.api_base_url);

    // Profile fields are filled in by whatever the server echoes on save.
    let session = Arc::new(Session::new(
        config.user_role,
        UserProfile {
            id: Uuid::nil(),
            name: String::new(),
            email: String::new(),
            headline: None,
            created_at: Utc::now(),
        },
    ));

    let state = AppState {
        api,
        notifier: Notifier::new(),
        session,
        config: config.clone(),
    };

    let manager = SettingsManager::new(
        state.api.clone(),
        state.notifier.clone(),
        state.session.clone(),
    );
    manager.load().await;

    println!(
        "{}",
        serde_json::to_string_pretty(&manager.document())?
    );

    if let Some(notice) = state.notifier.active() {
        info!("Active notice: {:?} {}", notice.kind, notice.message);
    }

    Ok(())
}
