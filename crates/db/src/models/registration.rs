//! Program registration entity model and DTOs.

use ecotours_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub user_id: DbId,
    pub program_type: String,
    pub status: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRegistration {
    pub user_id: DbId,
    #[validate(length(min = 1))]
    pub program_type: String,
    #[validate(length(min = 1))]
    pub status: String,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRegistration {
    pub program_type: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}
