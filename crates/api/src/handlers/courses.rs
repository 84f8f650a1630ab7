//! Course catalog handlers. Browsing is public; mutation is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::error::CoreError;
use ecotours_core::types::DbId;
use ecotours_db::models::course::{CreateCourse, UpdateCourse};
use ecotours_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses
///
/// Public course listing, newest first.
pub async fn list_courses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/{id}
///
/// Public detail view.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Course",
            id,
        })?;

    Ok(Json(DataResponse { data: course }))
}

/// POST /api/v1/courses
///
/// Create a course. Admin only.
pub async fn create_course(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    super::validate_input(&input)?;

    let course = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(
        course_id = course.id,
        admin_id = admin.principal.id,
        "Course created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// PATCH /api/v1/courses/{id}
///
/// Update a course. Admin only.
pub async fn update_course(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Course",
            id,
        })?;
    tracing::info!(course_id = id, "Course updated");

    Ok(Json(DataResponse { data: course }))
}

/// DELETE /api/v1/courses/{id}
///
/// Delete a course. Admin only.
pub async fn delete_course(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }
    tracing::info!(course_id = id, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}
