//! Program registration handlers. Registrations follow direct ownership:
//! the registering user and admins.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::authz::{scope_user_filter, Operation, Ownership, ResourceKind};
use ecotours_core::error::CoreError;
use ecotours_core::types::DbId;
use ecotours_db::models::registration::{CreateRegistration, Registration, UpdateRegistration};
use ecotours_db::repositories::RegistrationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflows::authorize;

/// Query parameters for GET /registrations.
#[derive(Debug, Deserialize, Default)]
pub struct RegistrationListQuery {
    pub user_id: Option<DbId>,
}

/// POST /api/v1/registrations
///
/// Register the authenticated user for a program (admins may register
/// anyone).
pub async fn create_registration(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRegistration>,
) -> AppResult<impl IntoResponse> {
    super::validate_input(&input)?;
    authorize(
        auth.principal,
        Operation::Create,
        ResourceKind::Registration,
        Ownership::direct(input.user_id),
    )?;

    let registration = RegistrationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        registration_id = registration.id,
        user_id = registration.user_id,
        "Registration created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

/// GET /api/v1/registrations
///
/// List registrations visible to the caller.
pub async fn list_registrations(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<RegistrationListQuery>,
) -> AppResult<impl IntoResponse> {
    let user_id = scope_user_filter(auth.principal, query.user_id);
    let registrations = RegistrationRepo::list(&state.pool, user_id).await?;

    Ok(Json(DataResponse { data: registrations }))
}

/// GET /api/v1/registrations/{id}
pub async fn get_registration(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let registration = load(&state, id).await?;
    authorize(
        auth.principal,
        Operation::Read,
        ResourceKind::Registration,
        Ownership::direct(registration.user_id),
    )?;

    Ok(Json(DataResponse { data: registration }))
}

/// PATCH /api/v1/registrations/{id}
pub async fn update_registration(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegistration>,
) -> AppResult<impl IntoResponse> {
    let registration = load(&state, id).await?;
    authorize(
        auth.principal,
        Operation::Update,
        ResourceKind::Registration,
        Ownership::direct(registration.user_id),
    )?;

    let updated = RegistrationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Registration",
            id,
        })?;
    tracing::info!(registration_id = id, "Registration updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/registrations/{id}
pub async fn delete_registration(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let registration = load(&state, id).await?;
    authorize(
        auth.principal,
        Operation::Delete,
        ResourceKind::Registration,
        Ownership::direct(registration.user_id),
    )?;

    let deleted = RegistrationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }));
    }
    tracing::info!(registration_id = id, "Registration deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn load(state: &AppState, id: DbId) -> AppResult<Registration> {
    RegistrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Registration",
            id,
        })
        .map_err(Into::into)
}
