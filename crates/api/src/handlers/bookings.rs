//! Booking handlers. All paths delegate to [`BookingWorkflow`]; this module
//! only shapes requests and responses.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::types::{DbId, Timestamp};
use ecotours_db::models::booking::{BookingFilter, CreateBooking, UpdateBooking};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflows::BookingWorkflow;

/// Query parameters for GET /bookings.
#[derive(Debug, Deserialize, Default)]
pub struct BookingListQuery {
    pub user_id: Option<DbId>,
    pub experience_id: Option<DbId>,
    pub date: Option<Timestamp>,
    pub status: Option<String>,
    /// Requests the provider view of this host's bookings.
    pub host_id: Option<DbId>,
}

fn workflow(state: &AppState) -> BookingWorkflow<'_> {
    BookingWorkflow::new(&state.pool, state.notifier.as_ref())
}

/// POST /api/v1/bookings
///
/// Create a booking for the authenticated user (admins may book on behalf
/// of anyone).
pub async fn create_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    let detail = workflow(&state).create(auth.principal, input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/bookings
///
/// List bookings visible to the caller, with optional filters.
pub async fn list_bookings(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = BookingFilter {
        user_id: query.user_id,
        experience_id: query.experience_id,
        date: query.date,
        status: query.status,
        experience_ids: None,
    };
    let bookings = workflow(&state)
        .list(auth.principal, filter, query.host_id)
        .await?;

    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/admin
///
/// Unfiltered listing for the admin dashboard. Non-admins are denied, not
/// silently filtered.
pub async fn list_bookings_admin(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = workflow(&state).list_for_admin(auth.principal).await?;

    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/provider/{host_id}
///
/// Every booking on experiences hosted by `host_id`. Admin or the host.
pub async fn list_bookings_for_provider(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(host_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bookings = workflow(&state)
        .list_for_provider(auth.principal, host_id)
        .await?;

    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/{id}
pub async fn get_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = workflow(&state).get(auth.principal, id).await?;

    Ok(Json(DataResponse { data: detail }))
}

/// PATCH /api/v1/bookings/{id}
pub async fn update_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<impl IntoResponse> {
    let booking = workflow(&state).update(auth.principal, id, input).await?;
    tracing::info!(booking_id = id, user_id = auth.principal.id, "Booking updated");

    Ok(Json(DataResponse { data: booking }))
}

/// DELETE /api/v1/bookings/{id}
pub async fn delete_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = workflow(&state).delete(auth.principal, id).await?;

    Ok(Json(DataResponse { data: booking }))
}
