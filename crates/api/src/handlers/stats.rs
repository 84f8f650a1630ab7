//! Site statistics handlers: the public display strip and the live
//! aggregate counts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_db::models::stat::CreateStat;
use ecotours_db::repositories::StatRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Public listing of the displayed site statistics.
pub async fn list_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = StatRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/stats/app
///
/// Live aggregate counts from the primary tables. Requires authentication.
pub async fn app_stats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = StatRepo::app_stats(&state.pool).await?;

    Ok(Json(DataResponse { data: stats }))
}

/// POST /api/v1/stats
///
/// Upsert a displayed statistic by title. Admin only.
pub async fn upsert_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStat>,
) -> AppResult<impl IntoResponse> {
    let stat = StatRepo::upsert(&state.pool, &input).await?;
    tracing::info!(
        stat_id = stat.id,
        admin_id = admin.principal.id,
        "Stat upserted"
    );

    Ok(Json(DataResponse { data: stat }))
}
