//! Authentication handlers: registration, login, and token validation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ecotours_core::error::CoreError;
use ecotours_db::models::user::{CreateUser, UserResponse};
use ecotours_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /auth/register.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    /// `"tourist"` or `"host"`; defaults to tourist.
    #[serde(default = "default_account_type")]
    pub account_type: String,
}

fn default_account_type() -> String {
    "tourist".to_string()
}

/// Request body for POST /auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token plus the authenticated user, returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// POST /api/v1/auth/register
///
/// Create an account, send the welcome email (best-effort), and return a
/// fresh access token. Registration can never grant the admin flag.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    super::validate_input(&input)?;
    validate_password_strength(&input.password).map_err(CoreError::Validation)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict("Email is already registered".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|err| AppError::InternalError(format!("Password hashing failed: {err}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            account_type: input.account_type,
            is_admin: false,
            profile_picture: None,
            bio: None,
            phone: None,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User registered");

    if let Err(err) = state
        .notifier
        .send_welcome(&user.email, &user.first_name)
        .await
    {
        tracing::warn!(error = %err, user_id = user.id, "Failed to send welcome email");
    }

    let token = generate_access_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|err| AppError::InternalError(format!("Token generation failed: {err}")))?;

    Ok(Json(DataResponse {
        data: AuthResponse {
            token,
            user: user.into(),
        },
    }))
}

/// POST /api/v1/auth/login
///
/// Verify credentials and return an access token. Unknown email and wrong
/// password produce the same response.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|err| AppError::InternalError(format!("Password verification failed: {err}")))?;
    if !verified {
        return Err(invalid_credentials());
    }

    let token = generate_access_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|err| AppError::InternalError(format!("Token generation failed: {err}")))?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(DataResponse {
        data: AuthResponse {
            token,
            user: user.into(),
        },
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

/// GET /api/v1/auth/validate
///
/// Resolve the bearer token to its user record. Used by the frontend on
/// startup to restore a session.
pub async fn validate(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.principal.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: auth.principal.id,
        })?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}
