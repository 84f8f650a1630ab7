//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod booking;
pub mod contact_message;
pub mod course;
pub mod enrollment;
pub mod experience;
pub mod registration;
pub mod stat;
pub mod user;
