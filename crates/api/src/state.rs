use std::sync::Arc;

use ecotours_notify::Notifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecotours_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Email notifier. SMTP-backed in production, disabled when SMTP is not
    /// configured, and a recording mock in workflow tests.
    pub notifier: Arc<dyn Notifier>,
}
