//! Pure domain logic for the EcoTours backend.
//!
//! No I/O lives in this crate. It defines the shared error taxonomy, the
//! authenticated [`principal::Principal`], the ownership-based authorization
//! guard in [`authz`], enrollment lifecycle constants, and input validation
//! helpers used by the booking workflow.

pub mod authz;
pub mod booking;
pub mod enrollment;
pub mod error;
pub mod principal;
pub mod types;
