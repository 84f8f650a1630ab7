//! The notifier trait and per-template payload types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::email::EmailError;

/// Data carried by a booking confirmation sent to the tourist.
#[derive(Debug, Clone)]
pub struct BookingEmail {
    pub experience_name: String,
    pub date: DateTime<Utc>,
    pub participants: i32,
    pub total_amount: f64,
}

/// Data carried by a new-booking alert sent to the experience host.
#[derive(Debug, Clone)]
pub struct HostBookingEmail {
    pub experience_name: String,
    pub date: DateTime<Utc>,
    pub participants: i32,
    pub customer_name: String,
}

/// Data carried by a course enrollment confirmation.
#[derive(Debug, Clone)]
pub struct CourseEmail {
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
}

/// Fire-and-forget email delivery.
///
/// Implementations attempt delivery and report success or failure; they make
/// no retry guarantees. Callers must treat failures as non-fatal events.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Welcome email after account registration.
    async fn send_welcome(&self, to: &str, first_name: &str) -> Result<(), EmailError>;

    /// Booking confirmation to the tourist who made the booking.
    async fn send_booking_confirmation(
        &self,
        to: &str,
        first_name: &str,
        details: &BookingEmail,
    ) -> Result<(), EmailError>;

    /// New-booking alert to the host of the booked experience.
    async fn send_host_booking_alert(
        &self,
        to: &str,
        first_name: &str,
        details: &HostBookingEmail,
    ) -> Result<(), EmailError>;

    /// Enrollment confirmation to the enrolled user.
    async fn send_enrollment_confirmation(
        &self,
        to: &str,
        first_name: &str,
        details: &CourseEmail,
    ) -> Result<(), EmailError>;
}

/// No-op notifier used when SMTP is not configured.
///
/// Logs each suppressed delivery at debug level and reports success, so the
/// rest of the system behaves identically with and without a mail server.
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send_welcome(&self, to: &str, _first_name: &str) -> Result<(), EmailError> {
        tracing::debug!(to, "Email delivery disabled; skipping welcome email");
        Ok(())
    }

    async fn send_booking_confirmation(
        &self,
        to: &str,
        _first_name: &str,
        _details: &BookingEmail,
    ) -> Result<(), EmailError> {
        tracing::debug!(to, "Email delivery disabled; skipping booking confirmation");
        Ok(())
    }

    async fn send_host_booking_alert(
        &self,
        to: &str,
        _first_name: &str,
        _details: &HostBookingEmail,
    ) -> Result<(), EmailError> {
        tracing::debug!(to, "Email delivery disabled; skipping host booking alert");
        Ok(())
    }

    async fn send_enrollment_confirmation(
        &self,
        to: &str,
        _first_name: &str,
        _details: &CourseEmail,
    ) -> Result<(), EmailError> {
        tracing::debug!(to, "Email delivery disabled; skipping enrollment confirmation");
        Ok(())
    }
}
