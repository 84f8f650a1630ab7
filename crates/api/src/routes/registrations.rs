//! Program registration routes, mounted at `/registrations`.
//!
//! ```text
//! GET    /      -> list_registrations (scoped to caller)
//! POST   /      -> create_registration
//! GET    /{id}  -> get_registration
//! PATCH  /{id}  -> update_registration
//! DELETE /{id}  -> delete_registration
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::registrations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(registrations::list_registrations).post(registrations::create_registration),
        )
        .route(
            "/{id}",
            get(registrations::get_registration)
                .patch(registrations::update_registration)
                .delete(registrations::delete_registration),
        )
}
