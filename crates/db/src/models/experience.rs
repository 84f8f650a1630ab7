//! Experience entity model and DTOs.

use ecotours_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full experience row. `host_id` defines provider ownership over every
/// booking that references this experience.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub host_id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub duration: f64,
    pub max_participants: i32,
    pub category: String,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new experience.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExperience {
    pub host_id: DbId,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub duration: f64,
    #[validate(range(min = 1))]
    pub max_participants: i32,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// DTO for updating an experience. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateExperience {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<f64>,
    pub max_participants: Option<i32>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}
