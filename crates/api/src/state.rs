use std::sync::Arc;

use carcare_cloud::{MediaCredentials, MediaHost};
use carcare_events::Notifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: carcare_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hosted image store (listing and deletion).
    pub media: Arc<dyn MediaHost>,
    /// Signing credentials; `None` disables upload signatures.
    pub media_credentials: Option<Arc<MediaCredentials>>,
    /// Transactional email.
    pub notifier: Arc<Notifier>,
}
