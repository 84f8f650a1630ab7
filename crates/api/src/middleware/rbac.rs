//! Admin-gating extractor.
//!
//! Wraps [`AuthUser`] and rejects requests whose principal does not carry the
//! admin flag. Use this in route handlers to enforce the explicit admin-only
//! endpoints (which deny outright rather than silently filtering).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ecotours_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the admin flag. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(auth): RequireAdmin) -> AppResult<Json<()>> {
///     // auth.principal is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !auth.principal.is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".into(),
            )));
        }
        Ok(RequireAdmin(auth))
    }
}
