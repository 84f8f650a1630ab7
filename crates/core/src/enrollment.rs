//! Enrollment lifecycle constants and transition rules.
//!
//! An enrollment is created in the `enrolled` state and transitions exactly
//! once to `completed`. There is no transition back: completing an
//! already-completed enrollment is a conflict, not a no-op, so `completed_at`
//! can never be silently overwritten.

/// Initial state of every enrollment.
pub const STATUS_ENROLLED: &str = "enrolled";

/// Terminal state after the user finishes the course.
pub const STATUS_COMPLETED: &str = "completed";

/// All valid enrollment status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_ENROLLED, STATUS_COMPLETED];

/// Check whether an enrollment in `current` may transition to `completed`.
///
/// Returns `Err` with a human-readable reason when the transition is invalid.
pub fn validate_completion(current: &str) -> Result<(), String> {
    match current {
        STATUS_ENROLLED => Ok(()),
        STATUS_COMPLETED => Err("Enrollment is already completed".to_string()),
        other => Err(format!("Enrollment is in unknown status '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrolled_may_complete() {
        assert!(validate_completion(STATUS_ENROLLED).is_ok());
    }

    #[test]
    fn completed_may_not_complete_again() {
        let err = validate_completion(STATUS_COMPLETED).unwrap_err();
        assert!(err.contains("already completed"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(validate_completion("cancelled").is_err());
    }
}
