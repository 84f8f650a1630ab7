//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod contact_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod experience_repo;
pub mod registration_repo;
pub mod stat_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use contact_repo::ContactRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use experience_repo::ExperienceRepo;
pub use registration_repo::RegistrationRepo;
pub use stat_repo::StatRepo;
pub use user_repo::UserRepo;
