//! HTTP handlers, grouped by resource.
//!
//! Handlers stay thin: extract, validate, delegate to a workflow or
//! repository, wrap in the response envelope. Ownership decisions live in
//! `crate::workflows`, never inline here.

pub mod auth;
pub mod bookings;
pub mod contact;
pub mod courses;
pub mod enrollments;
pub mod experiences;
pub mod registrations;
pub mod stats;
pub mod users;

use ecotours_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// Run `validator` derive checks, mapping failures to a 400 response.
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))
}
