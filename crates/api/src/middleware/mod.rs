//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated principal from a JWT
//!   Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the admin flag.

pub mod auth;
pub mod rbac;
