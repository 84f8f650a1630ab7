//! Enrollment handlers. All paths delegate to [`EnrollmentWorkflow`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::types::DbId;
use ecotours_db::models::enrollment::{CreateEnrollment, UpdateEnrollment};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflows::EnrollmentWorkflow;

/// Query parameters for GET /enrollments.
#[derive(Debug, Deserialize, Default)]
pub struct EnrollmentListQuery {
    pub user_id: Option<DbId>,
}

fn workflow(state: &AppState) -> EnrollmentWorkflow<'_> {
    EnrollmentWorkflow::new(&state.pool, state.notifier.as_ref())
}

/// POST /api/v1/enrollments
///
/// Enroll the authenticated user in a course (admins may enroll anyone).
pub async fn create_enrollment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEnrollment>,
) -> AppResult<impl IntoResponse> {
    let detail = workflow(&state).create(auth.principal, input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/enrollments
///
/// List enrollments visible to the caller.
pub async fn list_enrollments(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<EnrollmentListQuery>,
) -> AppResult<impl IntoResponse> {
    let enrollments = workflow(&state).list(auth.principal, query.user_id).await?;

    Ok(Json(DataResponse { data: enrollments }))
}

/// GET /api/v1/enrollments/{id}
pub async fn get_enrollment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = workflow(&state).get(auth.principal, id).await?;

    Ok(Json(DataResponse { data: detail }))
}

/// PATCH /api/v1/enrollments/{id}/complete
///
/// One-way transition to `completed`. Admin or the enrolled user.
pub async fn complete_enrollment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let enrollment = workflow(&state).complete(auth.principal, id).await?;

    Ok(Json(DataResponse { data: enrollment }))
}

/// PATCH /api/v1/enrollments/{id}
///
/// Direct record patch. Admin only.
pub async fn update_enrollment(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnrollment>,
) -> AppResult<impl IntoResponse> {
    let enrollment = workflow(&state).update(id, input).await?;
    tracing::info!(
        enrollment_id = id,
        admin_id = admin.principal.id,
        "Enrollment updated by admin"
    );

    Ok(Json(DataResponse { data: enrollment }))
}

/// DELETE /api/v1/enrollments/{id}
pub async fn delete_enrollment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    workflow(&state).delete(auth.principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
