//! Enrollment entity model and DTOs.

use ecotours_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::course::Course;
use crate::models::user::UserSummary;

/// Full enrollment row. Status is `"enrolled"` until the one-way transition
/// to `"completed"` sets `completed_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Enrollment with the user and course attached, returned by single-record
/// operations.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub user: UserSummary,
    pub course: Course,
}

/// Flattened enrollment row for list endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentListRow {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub course_title: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
}

/// DTO for creating an enrollment. Status and `completed_at` are not
/// caller-supplied; every enrollment starts as `"enrolled"`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    pub user_id: DbId,
    pub course_id: DbId,
}

/// DTO for the admin-only enrollment patch endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateEnrollment {
    pub status: Option<String>,
    pub completed_at: Option<Timestamp>,
}
