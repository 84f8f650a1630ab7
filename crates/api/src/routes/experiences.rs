//! Experience routes, mounted at `/experiences`.
//!
//! ```text
//! GET    /      -> list_experiences (public)
//! POST   /      -> create_experience
//! GET    /{id}  -> get_experience (public)
//! PATCH  /{id}  -> update_experience (host or admin)
//! DELETE /{id}  -> delete_experience (host or admin)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::experiences;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(experiences::list_experiences).post(experiences::create_experience),
        )
        .route(
            "/{id}",
            get(experiences::get_experience)
                .patch(experiences::update_experience)
                .delete(experiences::delete_experience),
        )
}
