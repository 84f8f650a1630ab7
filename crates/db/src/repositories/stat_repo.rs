//! Repository for the `stats` table and live aggregate counts.

use sqlx::PgPool;

use crate::models::stat::{AppStats, CreateStat, Stat};

const COLUMNS: &str = "id, title, value, icon, created_at, updated_at";

/// Provides upsert/list operations for displayed site statistics.
pub struct StatRepo;

impl StatRepo {
    /// Insert or update a statistic by its title.
    pub async fn upsert(pool: &PgPool, input: &CreateStat) -> Result<Stat, sqlx::Error> {
        let query = format!(
            "INSERT INTO stats (title, value, icon)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_stats_title
             DO UPDATE SET value = EXCLUDED.value, icon = EXCLUDED.icon, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(&input.title)
            .bind(&input.value)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// List all statistics.
    pub async fn list(pool: &PgPool) -> Result<Vec<Stat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats ORDER BY title");
        sqlx::query_as::<_, Stat>(&query).fetch_all(pool).await
    }

    /// Compute live aggregate counts from the primary tables.
    pub async fn app_stats(pool: &PgPool) -> Result<AppStats, sqlx::Error> {
        let (total_users, total_experiences, total_bookings, user_registrations) = tokio::try_join!(
            crate::repositories::UserRepo::count(pool),
            crate::repositories::ExperienceRepo::count(pool),
            crate::repositories::BookingRepo::count(pool),
            crate::repositories::RegistrationRepo::count(pool),
        )?;

        Ok(AppStats {
            total_users,
            total_experiences,
            total_bookings,
            user_registrations,
        })
    }
}
