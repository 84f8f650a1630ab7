//! Repository for the `bookings` table.

use ecotours_core::types::DbId;
use sqlx::{PgPool, QueryBuilder};

use crate::models::booking::{Booking, BookingFilter, BookingListRow, CreateBooking, UpdateBooking};

const COLUMNS: &str = "id, user_id, experience_id, date, participants, total_amount, \
                        status, payment_id, created_at, updated_at";

/// Joined column list for list queries (booking + experience title/host +
/// user summary).
const LIST_COLUMNS: &str = "b.id, b.user_id, b.experience_id, b.date, b.participants, \
                            b.total_amount, b.status, b.payment_id, b.created_at, b.updated_at, \
                            e.title AS experience_title, e.host_id, \
                            u.first_name AS user_first_name, u.last_name AS user_last_name, \
                            u.email AS user_email";

/// Provides CRUD and filtered listing for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (user_id, experience_id, date, participants, total_amount, \
                                   status, payment_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.user_id)
            .bind(input.experience_id)
            .bind(input.date)
            .bind(input.participants)
            .bind(input.total_amount)
            .bind(&input.status)
            .bind(&input.payment_id)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings matching `filter`, newest first, with experience and
    /// user summaries joined in.
    ///
    /// An `experience_ids` filter of `Some(vec![])` matches nothing; this is
    /// how an empty provider scope yields an empty result rather than an
    /// unfiltered one.
    pub async fn list(
        pool: &PgPool,
        filter: &BookingFilter,
    ) -> Result<Vec<BookingListRow>, sqlx::Error> {
        if matches!(&filter.experience_ids, Some(ids) if ids.is_empty()) {
            return Ok(Vec::new());
        }

        let mut qb: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            "SELECT {LIST_COLUMNS}
             FROM bookings b
             JOIN experiences e ON e.id = b.experience_id
             JOIN users u ON u.id = b.user_id
             WHERE 1 = 1"
        ));

        if let Some(user_id) = filter.user_id {
            qb.push(" AND b.user_id = ").push_bind(user_id);
        }
        if let Some(experience_id) = filter.experience_id {
            qb.push(" AND b.experience_id = ").push_bind(experience_id);
        }
        if let Some(date) = filter.date {
            qb.push(" AND b.date = ").push_bind(date);
        }
        if let Some(status) = &filter.status {
            qb.push(" AND b.status = ").push_bind(status.clone());
        }
        if let Some(ids) = &filter.experience_ids {
            qb.push(" AND b.experience_id = ANY(").push_bind(ids.clone()).push(")");
        }

        qb.push(" ORDER BY b.created_at DESC");

        qb.build_query_as::<BookingListRow>().fetch_all(pool).await
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                date = COALESCE($2, date),
                participants = COALESCE($3, participants),
                total_amount = COALESCE($4, total_amount),
                status = COALESCE($5, status),
                payment_id = COALESCE($6, payment_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.date)
            .bind(input.participants)
            .bind(input.total_amount)
            .bind(&input.status)
            .bind(&input.payment_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a booking. Returns the deleted row, or `None` if absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("DELETE FROM bookings WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of bookings.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await
    }
}
