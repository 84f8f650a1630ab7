//! Repository for the `registrations` table.

use ecotours_core::types::DbId;
use sqlx::PgPool;

use crate::models::registration::{CreateRegistration, Registration, UpdateRegistration};

const COLUMNS: &str = "id, user_id, program_type, status, message, created_at, updated_at";

/// Provides CRUD operations for program registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a new registration, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations (user_id, program_type, status, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(input.user_id)
            .bind(&input.program_type)
            .bind(&input.status)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List registrations, newest first, optionally restricted to one user.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
    ) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM registrations
             WHERE ($1::BIGINT IS NULL OR user_id = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a registration. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegistration,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET
                program_type = COALESCE($2, program_type),
                status = COALESCE($3, status),
                message = COALESCE($4, message),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(&input.program_type)
            .bind(&input.status)
            .bind(&input.message)
            .fetch_optional(pool)
            .await
    }

    /// Delete a registration. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of registrations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(pool)
            .await
    }
}
