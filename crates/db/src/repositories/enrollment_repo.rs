//! Repository for the `enrollments` table.
//!
//! The `uq_enrollments_user_course` unique constraint backs the
//! one-enrollment-per-(user, course) invariant; [`EnrollmentRepo::create`]
//! surfaces a violation as the raw 23505 database error, which callers map to
//! a conflict.

use ecotours_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentListRow, UpdateEnrollment,
};

const COLUMNS: &str = "id, user_id, course_id, status, completed_at, created_at, updated_at";

const LIST_COLUMNS: &str = "en.id, en.user_id, en.course_id, en.status, en.completed_at, \
                            en.created_at, en.updated_at, \
                            c.title AS course_title, \
                            u.first_name AS user_first_name, u.last_name AS user_last_name, \
                            u.email AS user_email";

/// Provides CRUD and lifecycle operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment in the initial `enrolled` state.
    pub async fn create(pool: &PgPool, input: &CreateEnrollment) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id, status, completed_at)
             VALUES ($1, $2, 'enrolled', NULL)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.user_id)
            .bind(input.course_id)
            .fetch_one(pool)
            .await
    }

    /// Find an enrollment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the enrollment for an exact (user, course) pair, if any.
    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// List enrollments, newest first, optionally restricted to one user,
    /// with course and user summaries joined in.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
    ) -> Result<Vec<EnrollmentListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS}
             FROM enrollments en
             JOIN courses c ON c.id = en.course_id
             JOIN users u ON u.id = en.user_id
             WHERE ($1::BIGINT IS NULL OR en.user_id = $1)
             ORDER BY en.created_at DESC"
        );
        sqlx::query_as::<_, EnrollmentListRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply an admin patch. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnrollment,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                status = COALESCE($2, status),
                completed_at = COALESCE($3, completed_at),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.completed_at)
            .fetch_optional(pool)
            .await
    }

    /// Transition an enrollment to `completed`, stamping `completed_at`.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                status = 'completed',
                completed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an enrollment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
