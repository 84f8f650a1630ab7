//! Enrollment workflow: duplicate-checked creation, ownership-scoped listing,
//! and the one-way completion transition.

use ecotours_core::authz::{scope_user_filter, Operation, Ownership, ResourceKind};
use ecotours_core::enrollment::{validate_completion, VALID_STATUSES};
use ecotours_core::error::CoreError;
use ecotours_core::principal::Principal;
use ecotours_core::types::DbId;
use ecotours_db::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentDetail, EnrollmentListRow, UpdateEnrollment,
};
use ecotours_db::models::user::UserSummary;
use ecotours_db::repositories::{CourseRepo, EnrollmentRepo, UserRepo};
use ecotours_db::DbPool;
use ecotours_notify::{CourseEmail, Notifier};

use super::authorize;
use crate::error::{is_unique_violation, AppError, AppResult};

/// Constraint backing one-enrollment-per-(user, course).
const UNIQUE_ENROLLMENT: &str = "uq_enrollments_user_course";

/// Orchestrates enrollment operations against the store and the notifier.
pub struct EnrollmentWorkflow<'a> {
    pool: &'a DbPool,
    notifier: &'a dyn Notifier,
}

impl<'a> EnrollmentWorkflow<'a> {
    pub fn new(pool: &'a DbPool, notifier: &'a dyn Notifier) -> Self {
        Self { pool, notifier }
    }

    /// Enroll `input.user_id` in `input.course_id`.
    ///
    /// Duplicates are rejected twice: an explicit lookup gives the common
    /// case a clean error, and the unique constraint catches the race where
    /// two identical requests pass the lookup concurrently. Both paths
    /// surface the same conflict.
    pub async fn create(
        &self,
        principal: Principal,
        input: CreateEnrollment,
    ) -> AppResult<EnrollmentDetail> {
        authorize(
            principal,
            Operation::Create,
            ResourceKind::Enrollment,
            Ownership::direct(input.user_id),
        )?;

        let user = UserRepo::find_by_id(self.pool, input.user_id)
            .await?
            .ok_or_else(|| CoreError::Validation("User not found".into()))?;

        let course = CourseRepo::find_by_id(self.pool, input.course_id)
            .await?
            .ok_or_else(|| CoreError::Validation("Course not found".into()))?;

        let existing =
            EnrollmentRepo::find_by_user_and_course(self.pool, input.user_id, input.course_id)
                .await?;
        if existing.is_some() {
            return Err(duplicate_enrollment());
        }

        let enrollment = match EnrollmentRepo::create(self.pool, &input).await {
            Ok(enrollment) => enrollment,
            Err(err) if is_unique_violation(&err, UNIQUE_ENROLLMENT) => {
                return Err(duplicate_enrollment());
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!(
            enrollment_id = enrollment.id,
            user_id = enrollment.user_id,
            course_id = enrollment.course_id,
            "Enrollment created"
        );

        let details = CourseEmail {
            title: course.title.clone(),
            description: course.description.clone(),
            duration: course.duration.clone(),
        };
        if let Err(err) = self
            .notifier
            .send_enrollment_confirmation(&user.email, &user.first_name, &details)
            .await
        {
            tracing::warn!(error = %err, enrollment_id = enrollment.id, "Failed to send enrollment confirmation");
        }

        Ok(EnrollmentDetail {
            user: UserSummary::from(&user),
            course,
            enrollment,
        })
    }

    /// List enrollments visible to `principal`. Non-admins only ever see
    /// their own, whatever filter they pass.
    pub async fn list(
        &self,
        principal: Principal,
        requested_user: Option<DbId>,
    ) -> AppResult<Vec<EnrollmentListRow>> {
        let user_id = scope_user_filter(principal, requested_user);
        Ok(EnrollmentRepo::list(self.pool, user_id).await?)
    }

    async fn load(&self, id: DbId) -> AppResult<Enrollment> {
        EnrollmentRepo::find_by_id(self.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Enrollment",
                id,
            })
            .map_err(Into::into)
    }

    /// Fetch one enrollment with its user and course attached.
    pub async fn get(&self, principal: Principal, id: DbId) -> AppResult<EnrollmentDetail> {
        let enrollment = self.load(id).await?;
        authorize(
            principal,
            Operation::Read,
            ResourceKind::Enrollment,
            Ownership::direct(enrollment.user_id),
        )?;

        let user = UserRepo::find_by_id(self.pool, enrollment.user_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Enrollment {id} references missing user {}",
                    enrollment.user_id
                ))
            })?;
        let course = CourseRepo::find_by_id(self.pool, enrollment.course_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Enrollment {id} references missing course {}",
                    enrollment.course_id
                ))
            })?;

        Ok(EnrollmentDetail {
            user: UserSummary::from(&user),
            course,
            enrollment,
        })
    }

    /// Transition an enrollment to `completed`.
    ///
    /// Re-completing an already-completed enrollment is a conflict, so the
    /// original `completed_at` stamp is never overwritten.
    pub async fn complete(&self, principal: Principal, id: DbId) -> AppResult<Enrollment> {
        let enrollment = self.load(id).await?;
        authorize(
            principal,
            Operation::Update,
            ResourceKind::Enrollment,
            Ownership::direct(enrollment.user_id),
        )?;

        validate_completion(&enrollment.status).map_err(CoreError::Conflict)?;

        let completed = EnrollmentRepo::complete(self.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Enrollment",
                id,
            })?;
        tracing::info!(enrollment_id = id, "Enrollment completed");
        Ok(completed)
    }

    /// Admin patch of an enrollment record. The caller is already gated by
    /// the admin extractor; this only validates the patched status value.
    pub async fn update(&self, id: DbId, input: UpdateEnrollment) -> AppResult<Enrollment> {
        if let Some(status) = &input.status {
            if !VALID_STATUSES.contains(&status.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Invalid enrollment status '{status}'"
                ))
                .into());
            }
        }

        EnrollmentRepo::update(self.pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Enrollment",
                id,
            })
            .map_err(Into::into)
    }

    /// Delete an enrollment.
    pub async fn delete(&self, principal: Principal, id: DbId) -> AppResult<()> {
        let enrollment = self.load(id).await?;
        authorize(
            principal,
            Operation::Delete,
            ResourceKind::Enrollment,
            Ownership::direct(enrollment.user_id),
        )?;

        let removed = EnrollmentRepo::delete(self.pool, id).await?;
        if !removed {
            return Err(CoreError::NotFound {
                entity: "Enrollment",
                id,
            }
            .into());
        }
        tracing::info!(enrollment_id = id, "Enrollment deleted");
        Ok(())
    }
}

fn duplicate_enrollment() -> AppError {
    AppError::Core(CoreError::Conflict(
        "User is already enrolled in this course".into(),
    ))
}
