//! Contact form routes, mounted at `/contact`.
//!
//! ```text
//! POST   /      -> create_message (public)
//! GET    /      -> list_messages (admin only)
//! GET    /{id}  -> get_message (admin only)
//! PATCH  /{id}  -> update_message (admin only)
//! DELETE /{id}  -> delete_message (admin only)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list_messages).post(contact::create_message))
        .route(
            "/{id}",
            get(contact::get_message)
                .patch(contact::update_message)
                .delete(contact::delete_message),
        )
}
