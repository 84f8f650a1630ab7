//! Booking entity model and DTOs.

use ecotours_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::experience::Experience;
use crate::models::user::UserSummary;

/// Full booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub experience_id: DbId,
    pub date: Timestamp,
    pub participants: i32,
    pub total_amount: f64,
    pub status: String,
    pub payment_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Booking with the referenced user and experience attached, returned by
/// single-booking operations.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: Booking,
    pub user: UserSummary,
    pub experience: Experience,
}

/// Flattened booking row for list endpoints, joined with the experience
/// title/host and a user summary in a single query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingListRow {
    pub id: DbId,
    pub user_id: DbId,
    pub experience_id: DbId,
    pub date: Timestamp,
    pub participants: i32,
    pub total_amount: f64,
    pub status: String,
    pub payment_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub experience_title: String,
    pub host_id: DbId,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
}

/// DTO for creating a booking. Field-level constraints (positive
/// participants/amount, non-empty status) are enforced by the booking
/// workflow before any store access.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub user_id: DbId,
    pub experience_id: DbId,
    pub date: Timestamp,
    pub participants: i32,
    pub total_amount: f64,
    pub status: String,
    pub payment_id: Option<String>,
}

/// DTO for updating a booking. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBooking {
    pub date: Option<Timestamp>,
    pub participants: Option<i32>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
    pub payment_id: Option<String>,
}

/// Filters accepted by the booking list endpoint. Ownership scoping is
/// applied on top of these before they reach the store.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub user_id: Option<DbId>,
    pub experience_id: Option<DbId>,
    pub date: Option<Timestamp>,
    pub status: Option<String>,
    /// Restrict to bookings on this set of experiences (resolved from a
    /// `host_id` filter). An empty vec matches nothing.
    pub experience_ids: Option<Vec<DbId>>,
}
