//! Repository for the `experiences` table.

use ecotours_core::types::DbId;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

const COLUMNS: &str = "id, host_id, title, description, location, price, duration, \
                        max_participants, category, images, created_at, updated_at";

/// Provides CRUD operations for experiences.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new experience, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateExperience) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences (host_id, title, description, location, price, duration, \
                                      max_participants, category, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(input.host_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.price)
            .bind(input.duration)
            .bind(input.max_participants)
            .bind(&input.category)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find an experience by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all experiences, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences ORDER BY created_at DESC");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Ids of every experience hosted by `host_id`. May be empty.
    pub async fn ids_for_host(pool: &PgPool, host_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM experiences WHERE host_id = $1")
            .bind(host_id)
            .fetch_all(pool)
            .await
    }

    /// Update an experience. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experiences SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                price = COALESCE($5, price),
                duration = COALESCE($6, duration),
                max_participants = COALESCE($7, max_participants),
                category = COALESCE($8, category),
                images = COALESCE($9, images),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.price)
            .bind(input.duration)
            .bind(input.max_participants)
            .bind(&input.category)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Delete an experience. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of experiences.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM experiences")
            .fetch_one(pool)
            .await
    }
}
