//! Route definitions, one module per resource.

pub mod auth;
pub mod bookings;
pub mod contact;
pub mod courses;
pub mod enrollments;
pub mod experiences;
pub mod health;
pub mod registrations;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes, mounted under `/api/v1` by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/experiences", experiences::router())
        .nest("/bookings", bookings::router())
        .nest("/courses", courses::router())
        .nest("/enrollments", enrollments::router())
        .nest("/registrations", registrations::router())
        .nest("/contact", contact::router())
        .nest("/stats", stats::router())
}
