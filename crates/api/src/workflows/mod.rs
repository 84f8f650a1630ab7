//! Domain workflows: guard evaluation, reference validation, store access,
//! and post-commit notification dispatch.
//!
//! Handlers stay thin; everything that decides whether and how a mutation
//! happens lives here. Each workflow is explicitly constructed from its pool
//! and notifier (no ambient wiring) and follows the same shape: load the
//! target record, evaluate the ownership guard against the loaded owner ids,
//! then act. Authorization is never evaluated against ids asserted in a
//! request body.

pub mod booking;
pub mod enrollment;

pub use booking::BookingWorkflow;
pub use enrollment::EnrollmentWorkflow;

use ecotours_core::authz::{decide, Operation, Ownership, ResourceKind, Verdict};
use ecotours_core::error::CoreError;
use ecotours_core::principal::Principal;

use crate::error::AppError;

/// Evaluate the ownership guard, mapping a denial to 403 Forbidden.
pub(crate) fn authorize(
    principal: Principal,
    op: Operation,
    kind: ResourceKind,
    ownership: Ownership,
) -> Result<(), AppError> {
    match decide(principal, op, kind, ownership) {
        Verdict::Allow => Ok(()),
        Verdict::Deny => Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this resource".into(),
        ))),
    }
}
