//! Site statistic entity model and DTOs.

use ecotours_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A displayed site statistic, upserted by title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stat {
    pub id: DbId,
    pub title: String,
    pub value: String,
    pub icon: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateStat {
    pub title: String,
    pub value: String,
    pub icon: Option<String>,
}

/// Live aggregate counts computed from the primary tables.
#[derive(Debug, Clone, Serialize)]
pub struct AppStats {
    pub total_users: i64,
    pub total_experiences: i64,
    pub total_bookings: i64,
    pub user_registrations: i64,
}
