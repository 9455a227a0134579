use std::sync::Arc;

use crate::api::JobBoardApi;
use crate::config::Config;
use crate::notify::Notifier;
use crate::session::Session;

/// Shared wiring handed to the flows built in `main`.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn JobBoardApi>,
    pub notifier: Notifier,
    pub session: Arc<Session>,
    /// Kept for flows that need per-request settings (upload timeout, role).
    #[allow(dead_code)]
    pub config: Config,
}
