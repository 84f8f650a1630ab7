//! Experience catalog handlers. Browsing is public; mutation belongs to the
//! host (or an admin).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::error::CoreError;
use ecotours_core::types::DbId;
use ecotours_db::models::experience::{CreateExperience, Experience, UpdateExperience};
use ecotours_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/experiences
///
/// Public catalog listing, newest first.
pub async fn list_experiences(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let experiences = ExperienceRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: experiences }))
}

/// GET /api/v1/experiences/{id}
///
/// Public detail view.
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let experience = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Experience",
            id,
        })?;

    Ok(Json(DataResponse { data: experience }))
}

/// POST /api/v1/experiences
///
/// Create an experience. The caller becomes the host unless an admin names
/// someone else.
pub async fn create_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    super::validate_input(&input)?;

    if !auth.principal.is_admin && input.host_id != auth.principal.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only create experiences you host".into(),
        )));
    }

    let experience = ExperienceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        experience_id = experience.id,
        host_id = experience.host_id,
        "Experience created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: experience })))
}

/// PATCH /api/v1/experiences/{id}
///
/// Update an experience. Host or admin.
pub async fn update_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExperience>,
) -> AppResult<impl IntoResponse> {
    let existing = load(&state, id).await?;
    require_host_or_admin(&auth, &existing)?;

    let experience = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Experience",
            id,
        })?;
    tracing::info!(experience_id = id, "Experience updated");

    Ok(Json(DataResponse { data: experience }))
}

/// DELETE /api/v1/experiences/{id}
///
/// Delete an experience. Host or admin.
pub async fn delete_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = load(&state, id).await?;
    require_host_or_admin(&auth, &existing)?;

    let deleted = ExperienceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }));
    }
    tracing::info!(experience_id = id, "Experience deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn load(state: &AppState, id: DbId) -> AppResult<Experience> {
    ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Experience",
            id,
        })
        .map_err(Into::into)
}

fn require_host_or_admin(auth: &AuthUser, experience: &Experience) -> Result<(), AppError> {
    if auth.principal.is_admin || auth.principal.id == experience.host_id {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this experience".into(),
        )))
    }
}
