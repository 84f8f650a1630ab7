//! The authenticated actor performing a request.

use crate::types::DbId;

/// Identity resolved from a bearer token by the API layer.
///
/// Immutable for the lifetime of a request and never persisted. Every
/// workflow operation receives an already-resolved `Principal`, never a raw
/// credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// The user's internal database id.
    pub id: DbId,
    /// Whether the user has the admin flag set.
    pub is_admin: bool,
}

impl Principal {
    pub fn new(id: DbId, is_admin: bool) -> Self {
        Self { id, is_admin }
    }
}
