//! Statistics routes, mounted at `/stats`.
//!
//! ```text
//! GET  /     -> list_stats (public)
//! POST /     -> upsert_stat (admin only)
//! GET  /app  -> app_stats (authenticated)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stats::list_stats).post(stats::upsert_stat))
        .route("/app", get(stats::app_stats))
}
