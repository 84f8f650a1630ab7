//! User routes, mounted at `/users`.
//!
//! ```text
//! GET    /      -> list_users (admin only)
//! POST   /      -> create_user (admin only)
//! GET    /{id}  -> get_user (admin or self)
//! PATCH  /{id}  -> update_user (admin or self)
//! DELETE /{id}  -> delete_user (admin or self)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}
