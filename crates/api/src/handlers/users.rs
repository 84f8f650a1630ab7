//! User management handlers. Listing and creation are admin-only; a user may
//! read and update their own record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::error::CoreError;
use ecotours_core::types::DbId;
use ecotours_db::models::user::{CreateUser, UpdateUser, UserResponse};
use ecotours_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
///
/// List all users. Admin only.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/users
///
/// Create a user directly (password hash supplied). Admin only; normal
/// signups go through /auth/register.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, admin_id = admin.principal.id, "User created by admin");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /api/v1/users/{id}
///
/// Fetch one user. Admin or the user themselves.
pub async fn get_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_self_or_admin(&auth, id)?;

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// PATCH /api/v1/users/{id}
///
/// Update profile fields. Admin or the user themselves.
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    require_self_or_admin(&auth, id)?;

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    tracing::info!(user_id = id, "User updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// DELETE /api/v1/users/{id}
///
/// Delete an account. Admin or the user themselves.
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_self_or_admin(&auth, id)?;

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn require_self_or_admin(auth: &AuthUser, id: DbId) -> Result<(), AppError> {
    if auth.principal.is_admin || auth.principal.id == id {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this user".into(),
        )))
    }
}
