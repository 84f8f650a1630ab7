//! Booking routes, mounted at `/bookings`.
//!
//! ```text
//! GET    /                    -> list_bookings (scoped to caller)
//! POST   /                    -> create_booking
//! GET    /admin               -> list_bookings_admin (admin only)
//! GET    /provider/{host_id}  -> list_bookings_for_provider (admin or host)
//! GET    /{id}                -> get_booking
//! PATCH  /{id}                -> update_booking
//! DELETE /{id}                -> delete_booking
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/admin", get(bookings::list_bookings_admin))
        .route(
            "/provider/{host_id}",
            get(bookings::list_bookings_for_provider),
        )
        .route(
            "/{id}",
            get(bookings::get_booking)
                .patch(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
}
