//! Enrollment routes, mounted at `/enrollments`.
//!
//! ```text
//! GET    /               -> list_enrollments (scoped to caller)
//! POST   /               -> create_enrollment
//! GET    /{id}           -> get_enrollment
//! PATCH  /{id}           -> update_enrollment (admin only)
//! DELETE /{id}           -> delete_enrollment
//! PATCH  /{id}/complete  -> complete_enrollment (admin or the enrolled user)
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::enrollments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(enrollments::list_enrollments).post(enrollments::create_enrollment),
        )
        .route(
            "/{id}",
            get(enrollments::get_enrollment)
                .patch(enrollments::update_enrollment)
                .delete(enrollments::delete_enrollment),
        )
        .route("/{id}/complete", patch(enrollments::complete_enrollment))
}
