//! Contact form message entity model and DTOs.

use ecotours_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form. New messages always start in status
/// `"new"`; the status field is managed by admins afterwards.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactMessage {
    pub status: Option<String>,
}
