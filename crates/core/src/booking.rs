//! Booking input constraints, checked before any store access.

/// Validate the numeric and string constraints of a booking create request.
///
/// Reference existence (user, experience) is the workflow's job; this only
/// covers the field-level constraints: participants and total amount must be
/// strictly positive, and status must be non-empty. Status is otherwise
/// caller-supplied and recorded as-is -- there is no booking state machine.
pub fn validate_booking_input(
    participants: i32,
    total_amount: f64,
    status: &str,
) -> Result<(), String> {
    if participants <= 0 {
        return Err(format!(
            "participants must be a positive integer, got {participants}"
        ));
    }
    if !(total_amount > 0.0) {
        return Err(format!(
            "totalAmount must be a positive number, got {total_amount}"
        ));
    }
    if status.trim().is_empty() {
        return Err("status must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        assert!(validate_booking_input(2, 150.0, "pending").is_ok());
    }

    #[test]
    fn rejects_zero_or_negative_participants() {
        assert!(validate_booking_input(0, 150.0, "pending").is_err());
        assert!(validate_booking_input(-3, 150.0, "pending").is_err());
    }

    #[test]
    fn rejects_non_positive_amount() {
        assert!(validate_booking_input(1, 0.0, "pending").is_err());
        assert!(validate_booking_input(1, -10.0, "pending").is_err());
        // NaN fails the positivity check rather than passing through.
        assert!(validate_booking_input(1, f64::NAN, "pending").is_err());
    }

    #[test]
    fn rejects_blank_status() {
        assert!(validate_booking_input(1, 10.0, "").is_err());
        assert!(validate_booking_input(1, 10.0, "   ").is_err());
    }
}
