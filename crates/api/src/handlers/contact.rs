//! Contact form handlers. Submission is public; triage is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::error::CoreError;
use ecotours_core::types::DbId;
use ecotours_db::models::contact_message::{CreateContactMessage, UpdateContactMessage};
use ecotours_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Public contact form. New messages always start in status `new`.
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    super::validate_input(&input)?;

    let message = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// GET /api/v1/contact
///
/// List all messages, newest first. Admin only.
pub async fn list_messages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let messages = ContactRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/contact/{id}
pub async fn get_message(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        })?;

    Ok(Json(DataResponse { data: message }))
}

/// PATCH /api/v1/contact/{id}
///
/// Update a message's triage status. Admin only.
pub async fn update_message(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactMessage>,
) -> AppResult<impl IntoResponse> {
    let message = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        })?;

    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/v1/contact/{id}
pub async fn delete_message(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
