//! SMTP delivery via lettre.
//!
//! [`SmtpNotifier`] wraps the `lettre` async SMTP transport to send
//! plain-text notification emails. Configuration is loaded from environment
//! variables; if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns
//! `None` and the caller should fall back to the disabled notifier.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::notifier::{BookingEmail, CourseEmail, HostBookingEmail, Notifier};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@ecotours.local";

/// Sender display name on every outgoing message.
const SENDER_NAME: &str = "EcoTours Rwanda";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and the disabled notifier should be used.
    ///
    /// | Variable        | Required | Default                   |
    /// |-----------------|----------|---------------------------|
    /// | `SMTP_HOST`     | yes      | —                         |
    /// | `SMTP_PORT`     | no       | `587`                     |
    /// | `SMTP_FROM`     | no       | `noreply@ecotours.local`  |
    /// | `SMTP_USER`     | no       | —                         |
    /// | `SMTP_PASSWORD` | no       | —                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// SmtpNotifier
// ---------------------------------------------------------------------------

/// Sends notification emails over SMTP.
pub struct SmtpNotifier {
    config: EmailConfig,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    async fn deliver(&self, to: &str, subject: &str, body: String) -> Result<(), EmailError> {
        let from = format!("\"{SENDER_NAME}\" <{}>", self.config.from_address);

        let email = Message::builder()
            .from(from.parse().map_err(EmailError::Address)?)
            .to(to.parse().map_err(EmailError::Address)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to, subject, "Notification email sent");
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_welcome(&self, to: &str, first_name: &str) -> Result<(), EmailError> {
        let body = format!(
            "Welcome to EcoTours Rwanda, {first_name}!\n\n\
             Thank you for registering with us. You can now explore and book\n\
             eco-friendly experiences across Rwanda.\n\n\
             Best regards,\nThe EcoTours Rwanda Team\n"
        );
        self.deliver(to, "Welcome to EcoTours Rwanda", body).await
    }

    async fn send_booking_confirmation(
        &self,
        to: &str,
        first_name: &str,
        details: &BookingEmail,
    ) -> Result<(), EmailError> {
        let body = format!(
            "Dear {first_name},\n\n\
             Your booking has been confirmed!\n\n\
             Experience: {}\n\
             Date: {}\n\
             Participants: {}\n\
             Total amount: ${:.2}\n\n\
             We're looking forward to providing you with an amazing experience!\n\n\
             Best regards,\nThe EcoTours Rwanda Team\n",
            details.experience_name,
            details.date.format("%Y-%m-%d"),
            details.participants,
            details.total_amount,
        );
        self.deliver(to, "Booking Confirmation - EcoTours Rwanda", body)
            .await
    }

    async fn send_host_booking_alert(
        &self,
        to: &str,
        first_name: &str,
        details: &HostBookingEmail,
    ) -> Result<(), EmailError> {
        let body = format!(
            "Dear {first_name},\n\n\
             A new booking has been made for one of your experiences:\n\n\
             Experience: {}\n\
             Date: {}\n\
             Participants: {}\n\
             Customer: {}\n\n\
             Please log into your guide portal to manage this booking.\n\n\
             Best regards,\nThe EcoTours Rwanda Team\n",
            details.experience_name,
            details.date.format("%Y-%m-%d"),
            details.participants,
            details.customer_name,
        );
        self.deliver(to, "New Booking Received - EcoTours Rwanda", body)
            .await
    }

    async fn send_enrollment_confirmation(
        &self,
        to: &str,
        first_name: &str,
        details: &CourseEmail,
    ) -> Result<(), EmailError> {
        let duration = details.duration.as_deref().unwrap_or("self-paced");
        let body = format!(
            "Dear {first_name},\n\n\
             You have successfully enrolled in the following course:\n\n\
             {}\n{}\n\
             Duration: {duration}\n\n\
             You will receive further instructions and course materials shortly.\n\n\
             Best regards,\nThe EcoTours Rwanda Team\n",
            details.title, details.description,
        );
        let subject = format!("Course Enrollment: {}", details.title);
        self.deliver(to, &subject, body).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        // Ensure SMTP_HOST is not set in the test environment.
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn email_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }

    #[tokio::test]
    async fn disabled_notifier_always_succeeds() {
        use crate::notifier::{DisabledNotifier, Notifier};

        let notifier = DisabledNotifier;
        assert!(notifier.send_welcome("a@b.c", "Alice").await.is_ok());
        assert!(notifier
            .send_enrollment_confirmation(
                "a@b.c",
                "Alice",
                &CourseEmail {
                    title: "Birding 101".into(),
                    description: "Intro to birding".into(),
                    duration: None,
                },
            )
            .await
            .is_ok());
    }
}
