//! Course routes, mounted at `/courses`.
//!
//! ```text
//! GET    /      -> list_courses (public)
//! POST   /      -> create_course (admin only)
//! GET    /{id}  -> get_course (public)
//! PATCH  /{id}  -> update_course (admin only)
//! DELETE /{id}  -> delete_course (admin only)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route(
            "/{id}",
            get(courses::get_course)
                .patch(courses::update_course)
                .delete(courses::delete_course),
        )
}
