//! Booking workflow: creation with reference validation and dual
//! notifications, ownership-scoped listing, and guarded read/update/delete.

use ecotours_core::authz::{scope_booking_list, Operation, Ownership, ResourceKind};
use ecotours_core::booking::validate_booking_input;
use ecotours_core::error::CoreError;
use ecotours_core::principal::Principal;
use ecotours_core::types::DbId;
use ecotours_db::models::booking::{
    Booking, BookingDetail, BookingFilter, BookingListRow, CreateBooking, UpdateBooking,
};
use ecotours_db::models::experience::Experience;
use ecotours_db::models::user::{User, UserSummary};
use ecotours_db::repositories::{BookingRepo, ExperienceRepo, UserRepo};
use ecotours_db::DbPool;
use ecotours_notify::{BookingEmail, HostBookingEmail, Notifier};

use super::authorize;
use crate::error::{AppError, AppResult};

/// Orchestrates booking operations against the store and the notifier.
///
/// Constructed per request from the shared pool and notifier; holds no state
/// of its own.
pub struct BookingWorkflow<'a> {
    pool: &'a DbPool,
    notifier: &'a dyn Notifier,
}

impl<'a> BookingWorkflow<'a> {
    pub fn new(pool: &'a DbPool, notifier: &'a dyn Notifier) -> Self {
        Self { pool, notifier }
    }

    /// Create a booking on behalf of `input.user_id`.
    ///
    /// Validates field constraints and both references before inserting, then
    /// dispatches the tourist confirmation and host alert emails. Email
    /// failures are logged and never affect the response: by the time they
    /// run, the booking is committed.
    pub async fn create(
        &self,
        principal: Principal,
        input: CreateBooking,
    ) -> AppResult<BookingDetail> {
        authorize(
            principal,
            Operation::Create,
            ResourceKind::Booking,
            Ownership::direct(input.user_id),
        )?;

        validate_booking_input(input.participants, input.total_amount, &input.status)
            .map_err(CoreError::Validation)?;

        // Missing references are a client error on create, not a 404: the
        // booking itself does not exist yet.
        let experience = ExperienceRepo::find_by_id(self.pool, input.experience_id)
            .await?
            .ok_or_else(|| CoreError::Validation("Experience not found".into()))?;

        let user = UserRepo::find_by_id(self.pool, input.user_id)
            .await?
            .ok_or_else(|| CoreError::Validation("User not found".into()))?;

        let booking = BookingRepo::create(self.pool, &input).await?;
        tracing::info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            experience_id = booking.experience_id,
            "Booking created"
        );

        // The host lookup is also best-effort: a missing host only suppresses
        // the alert, it never rolls back the booking.
        let host = match UserRepo::find_by_id(self.pool, experience.host_id).await {
            Ok(host) => host,
            Err(err) => {
                tracing::warn!(error = %err, host_id = experience.host_id, "Failed to load host for booking alert");
                None
            }
        };

        notify_booking_created(self.notifier, &user, host.as_ref(), &booking, &experience).await;

        Ok(BookingDetail {
            user: UserSummary::from(&user),
            experience,
            booking,
        })
    }

    /// List bookings visible to `principal`, applying the requested filters
    /// within their visibility.
    ///
    /// A `host_id` filter is resolved to the host's experience ids before the
    /// query runs; a host with no experiences gets an empty list, never an
    /// unfiltered one.
    pub async fn list(
        &self,
        principal: Principal,
        mut filter: BookingFilter,
        requested_host: Option<DbId>,
    ) -> AppResult<Vec<BookingListRow>> {
        let scope = scope_booking_list(principal, filter.user_id, requested_host);
        filter.user_id = scope.user_id;

        if let Some(host_id) = scope.host_id {
            let ids = ExperienceRepo::ids_for_host(self.pool, host_id).await?;
            filter.experience_ids = Some(ids);
        }

        Ok(BookingRepo::list(self.pool, &filter).await?)
    }

    /// Unfiltered listing for the admin dashboard. Denies non-admins outright
    /// instead of silently filtering.
    pub async fn list_for_admin(&self, principal: Principal) -> AppResult<Vec<BookingListRow>> {
        if !principal.is_admin {
            return Err(CoreError::Forbidden("Admin access required".into()).into());
        }
        Ok(BookingRepo::list(self.pool, &BookingFilter::default()).await?)
    }

    /// Provider view of every booking on experiences hosted by `host_id`.
    /// Allowed for admins and for the host themselves.
    pub async fn list_for_provider(
        &self,
        principal: Principal,
        host_id: DbId,
    ) -> AppResult<Vec<BookingListRow>> {
        if !principal.is_admin && principal.id != host_id {
            return Err(CoreError::Forbidden(
                "You do not have access to this provider's bookings".into(),
            )
            .into());
        }

        let ids = ExperienceRepo::ids_for_host(self.pool, host_id).await?;
        let filter = BookingFilter {
            experience_ids: Some(ids),
            ..Default::default()
        };
        Ok(BookingRepo::list(self.pool, &filter).await?)
    }

    /// Load a booking together with its two-sided ownership, or fail with 404.
    async fn load_with_ownership(&self, id: DbId) -> AppResult<(Booking, Experience)> {
        let booking = BookingRepo::find_by_id(self.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id,
            })?;

        // The FK guarantees the experience exists; a miss here is data
        // corruption.
        let experience = ExperienceRepo::find_by_id(self.pool, booking.experience_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Booking {id} references missing experience {}",
                    booking.experience_id
                ))
            })?;

        Ok((booking, experience))
    }

    /// Fetch one booking with its user and experience attached.
    pub async fn get(&self, principal: Principal, id: DbId) -> AppResult<BookingDetail> {
        let (booking, experience) = self.load_with_ownership(id).await?;
        authorize(
            principal,
            Operation::Read,
            ResourceKind::Booking,
            Ownership::booking(booking.user_id, experience.host_id),
        )?;

        let user = UserRepo::find_by_id(self.pool, booking.user_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Booking {id} references missing user {}",
                    booking.user_id
                ))
            })?;

        Ok(BookingDetail {
            user: UserSummary::from(&user),
            experience,
            booking,
        })
    }

    /// Apply a partial update to a booking.
    pub async fn update(
        &self,
        principal: Principal,
        id: DbId,
        input: UpdateBooking,
    ) -> AppResult<Booking> {
        let (booking, experience) = self.load_with_ownership(id).await?;
        authorize(
            principal,
            Operation::Update,
            ResourceKind::Booking,
            Ownership::booking(booking.user_id, experience.host_id),
        )?;

        // Patched fields obey the same constraints as creation.
        if let Some(participants) = input.participants {
            if participants <= 0 {
                return Err(CoreError::Validation(format!(
                    "participants must be a positive integer, got {participants}"
                ))
                .into());
            }
        }
        if let Some(total_amount) = input.total_amount {
            if !(total_amount > 0.0) {
                return Err(CoreError::Validation(format!(
                    "totalAmount must be a positive number, got {total_amount}"
                ))
                .into());
            }
        }
        if let Some(status) = &input.status {
            if status.trim().is_empty() {
                return Err(CoreError::Validation("status must not be empty".into()).into());
            }
        }

        let updated = BookingRepo::update(self.pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id,
            })?;
        Ok(updated)
    }

    /// Delete a booking, returning the removed row.
    pub async fn delete(&self, principal: Principal, id: DbId) -> AppResult<Booking> {
        let (booking, experience) = self.load_with_ownership(id).await?;
        authorize(
            principal,
            Operation::Delete,
            ResourceKind::Booking,
            Ownership::booking(booking.user_id, experience.host_id),
        )?;

        let deleted = BookingRepo::delete(self.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id,
            })?;
        tracing::info!(booking_id = id, "Booking deleted");
        Ok(deleted)
    }
}

/// Dispatch the two post-creation emails concurrently. Failures are logged
/// at warn level and swallowed.
async fn notify_booking_created(
    notifier: &dyn Notifier,
    tourist: &User,
    host: Option<&User>,
    booking: &Booking,
    experience: &Experience,
) {
    let confirmation = BookingEmail {
        experience_name: experience.title.clone(),
        date: booking.date,
        participants: booking.participants,
        total_amount: booking.total_amount,
    };

    let send_confirmation = async {
        if let Err(err) = notifier
            .send_booking_confirmation(&tourist.email, &tourist.first_name, &confirmation)
            .await
        {
            tracing::warn!(error = %err, booking_id = booking.id, "Failed to send booking confirmation");
        }
    };

    let send_alert = async {
        if let Some(host) = host {
            let alert = HostBookingEmail {
                experience_name: experience.title.clone(),
                date: booking.date,
                participants: booking.participants,
                customer_name: tourist.full_name(),
            };
            if let Err(err) = notifier
                .send_host_booking_alert(&host.email, &host.first_name, &alert)
                .await
            {
                tracing::warn!(error = %err, booking_id = booking.id, "Failed to send host booking alert");
            }
        }
    };

    tokio::join!(send_confirmation, send_alert);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use ecotours_notify::{CourseEmail, EmailError};
    use std::sync::Mutex;

    /// Records every attempted send; optionally fails the tourist
    /// confirmation to prove the host alert still goes out.
    struct RecordingNotifier {
        fail_confirmation: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn new(fail_confirmation: bool) -> Self {
            Self {
                fail_confirmation,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_welcome(&self, to: &str, _first_name: &str) -> Result<(), EmailError> {
            self.calls.lock().unwrap().push(format!("welcome:{to}"));
            Ok(())
        }

        async fn send_booking_confirmation(
            &self,
            to: &str,
            _first_name: &str,
            _details: &BookingEmail,
        ) -> Result<(), EmailError> {
            self.calls.lock().unwrap().push(format!("confirmation:{to}"));
            if self.fail_confirmation {
                return Err(EmailError::Build("simulated failure".into()));
            }
            Ok(())
        }

        async fn send_host_booking_alert(
            &self,
            to: &str,
            _first_name: &str,
            _details: &HostBookingEmail,
        ) -> Result<(), EmailError> {
            self.calls.lock().unwrap().push(format!("alert:{to}"));
            Ok(())
        }

        async fn send_enrollment_confirmation(
            &self,
            to: &str,
            _first_name: &str,
            _details: &CourseEmail,
        ) -> Result<(), EmailError> {
            self.calls.lock().unwrap().push(format!("enrollment:{to}"));
            Ok(())
        }
    }

    fn test_user(id: DbId, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            password_hash: "hash".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            account_type: "tourist".to_string(),
            is_admin: false,
            profile_picture: None,
            bio: None,
            phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_experience(id: DbId, host_id: DbId) -> Experience {
        Experience {
            id,
            host_id,
            title: "Gorilla Trek".to_string(),
            description: "A trek".to_string(),
            location: "Volcanoes NP".to_string(),
            price: 150.0,
            duration: 6.0,
            max_participants: 8,
            category: "wildlife".to_string(),
            images: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_booking(id: DbId, user_id: DbId, experience_id: DbId) -> Booking {
        Booking {
            id,
            user_id,
            experience_id,
            date: Utc::now(),
            participants: 2,
            total_amount: 300.0,
            status: "pending".to_string(),
            payment_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn both_emails_are_dispatched() {
        let notifier = RecordingNotifier::new(false);
        let tourist = test_user(1, "tourist@example.com");
        let host = test_user(2, "host@example.com");
        let experience = test_experience(10, host.id);
        let booking = test_booking(100, tourist.id, experience.id);

        notify_booking_created(&notifier, &tourist, Some(&host), &booking, &experience).await;

        let calls = notifier.calls();
        assert!(calls.contains(&"confirmation:tourist@example.com".to_string()));
        assert!(calls.contains(&"alert:host@example.com".to_string()));
    }

    #[tokio::test]
    async fn host_alert_still_sent_when_confirmation_fails() {
        let notifier = RecordingNotifier::new(true);
        let tourist = test_user(1, "tourist@example.com");
        let host = test_user(2, "host@example.com");
        let experience = test_experience(10, host.id);
        let booking = test_booking(100, tourist.id, experience.id);

        notify_booking_created(&notifier, &tourist, Some(&host), &booking, &experience).await;

        let calls = notifier.calls();
        assert!(calls.contains(&"alert:host@example.com".to_string()));
    }

    #[tokio::test]
    async fn missing_host_suppresses_only_the_alert() {
        let notifier = RecordingNotifier::new(false);
        let tourist = test_user(1, "tourist@example.com");
        let experience = test_experience(10, 2);
        let booking = test_booking(100, tourist.id, experience.id);

        notify_booking_created(&notifier, &tourist, None, &booking, &experience).await;

        let calls = notifier.calls();
        assert!(calls.contains(&"confirmation:tourist@example.com".to_string()));
        assert!(!calls.iter().any(|c| c.starts_with("alert:")));
    }
}
