//! Email notification delivery for the EcoTours backend.
//!
//! The [`Notifier`] trait is the seam between the workflows and the outside
//! world: workflows call it after their primary mutation has succeeded, treat
//! every failure as non-fatal, and never let a delivery error surface to the
//! API caller. [`SmtpNotifier`] is the production implementation (lettre,
//! async SMTP); [`DisabledNotifier`] is used when SMTP is not configured.

mod email;
mod notifier;

pub use email::{EmailConfig, EmailError, SmtpNotifier};
pub use notifier::{
    BookingEmail, CourseEmail, DisabledNotifier, HostBookingEmail, Notifier,
};
