//! Ownership-based authorization guard.
//!
//! Every handler that touches bookings, enrollments, or registrations goes
//! through [`decide`] rather than re-deriving ownership checks inline.
//! Ownership is two-sided for bookings: the tourist who made the booking owns
//! it directly, and the host of the referenced experience owns it derivatively.
//! Enrollments and registrations are owned only by their `user_id`.
//!
//! [`decide`] is a pure function over already-loaded record data. Callers must
//! load the target record first and pass its real owner ids -- authorization is
//! never evaluated against ids asserted in a request body.

use crate::principal::Principal;
use crate::types::DbId;

/// The resource kinds covered by the ownership guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Booking,
    Enrollment,
    Registration,
}

/// The operation being attempted on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

/// Owner ids of a single record, as loaded from the store.
///
/// `host_id` is the host of the referenced experience and is only meaningful
/// for bookings; it is `None` for every other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    /// Direct owner (`user_id` column of the record).
    pub user_id: DbId,
    /// Derived provider owner, for bookings only.
    pub host_id: Option<DbId>,
}

impl Ownership {
    /// Ownership of a record with only a direct `user_id` owner.
    pub fn direct(user_id: DbId) -> Self {
        Self {
            user_id,
            host_id: None,
        }
    }

    /// Two-sided booking ownership: the tourist and the experience host.
    pub fn booking(user_id: DbId, host_id: DbId) -> Self {
        Self {
            user_id,
            host_id: Some(host_id),
        }
    }
}

/// The guard's verdict. Never an error: a denial is a normal outcome that the
/// API layer maps to 403 Forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny,
}

impl Verdict {
    pub fn is_allowed(self) -> bool {
        self == Verdict::Allow
    }
}

/// Decide whether `principal` may perform `op` on a record of `kind` with the
/// given `ownership`. Rules are checked in precedence order; first match wins:
///
/// 1. Admins may do anything.
/// 2. Anyone may create a record that names themselves as its `user_id`.
/// 3. Bookings may be read/updated/deleted by the tourist or the host.
/// 4. Enrollments and registrations may be read/updated/deleted by their
///    `user_id` owner.
/// 5. Everything else is denied.
pub fn decide(
    principal: Principal,
    op: Operation,
    kind: ResourceKind,
    ownership: Ownership,
) -> Verdict {
    if principal.is_admin {
        return Verdict::Allow;
    }

    if op == Operation::Create {
        return if ownership.user_id == principal.id {
            Verdict::Allow
        } else {
            Verdict::Deny
        };
    }

    let allowed = match kind {
        ResourceKind::Booking => {
            ownership.user_id == principal.id || ownership.host_id == Some(principal.id)
        }
        ResourceKind::Enrollment | ResourceKind::Registration => {
            ownership.user_id == principal.id
        }
    };

    if allowed {
        Verdict::Allow
    } else {
        Verdict::Deny
    }
}

// ---------------------------------------------------------------------------
// Listing scope
// ---------------------------------------------------------------------------

/// Coerce a `user_id` list filter to what the principal may actually see.
///
/// Admins see whatever they asked for (including everything, when `requested`
/// is `None`). Non-admins are always restricted to their own records,
/// regardless of the filter they passed.
pub fn scope_user_filter(principal: Principal, requested: Option<DbId>) -> Option<DbId> {
    if principal.is_admin {
        requested
    } else {
        Some(principal.id)
    }
}

/// Ownership scope applied to a booking listing before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingListScope {
    /// Restrict to bookings made by this tourist.
    pub user_id: Option<DbId>,
    /// Restrict to bookings on experiences hosted by this provider.
    pub host_id: Option<DbId>,
}

/// Coerce booking list filters to the principal's visibility.
///
/// Admins pass both filters through untouched. A non-admin asking for the
/// provider view of their own experiences (`requested_host == principal.id`)
/// gets provider scope; any other non-admin request collapses to the tourist
/// scope of their own bookings, silently discarding a foreign `user_id` or
/// `host_id` filter.
pub fn scope_booking_list(
    principal: Principal,
    requested_user: Option<DbId>,
    requested_host: Option<DbId>,
) -> BookingListScope {
    if principal.is_admin {
        return BookingListScope {
            user_id: requested_user,
            host_id: requested_host,
        };
    }

    if requested_host == Some(principal.id) {
        return BookingListScope {
            user_id: None,
            host_id: Some(principal.id),
        };
    }

    BookingListScope {
        user_id: Some(principal.id),
        host_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Principal = Principal {
        id: 1,
        is_admin: true,
    };
    const TOURIST: Principal = Principal {
        id: 10,
        is_admin: false,
    };
    const HOST: Principal = Principal {
        id: 20,
        is_admin: false,
    };
    const STRANGER: Principal = Principal {
        id: 30,
        is_admin: false,
    };

    /// A booking made by TOURIST on an experience hosted by HOST.
    fn booking() -> Ownership {
        Ownership::booking(TOURIST.id, HOST.id)
    }

    #[test]
    fn admin_is_allowed_everything() {
        for op in [
            Operation::Create,
            Operation::Read,
            Operation::Update,
            Operation::Delete,
        ] {
            for kind in [
                ResourceKind::Booking,
                ResourceKind::Enrollment,
                ResourceKind::Registration,
            ] {
                assert_eq!(
                    decide(ADMIN, op, kind, Ownership::direct(999)),
                    Verdict::Allow
                );
            }
        }
    }

    #[test]
    fn create_for_self_is_allowed() {
        let verdict = decide(
            TOURIST,
            Operation::Create,
            ResourceKind::Booking,
            Ownership::direct(TOURIST.id),
        );
        assert_eq!(verdict, Verdict::Allow);
    }

    #[test]
    fn create_for_someone_else_is_denied() {
        let verdict = decide(
            TOURIST,
            Operation::Create,
            ResourceKind::Booking,
            Ownership::direct(STRANGER.id),
        );
        assert_eq!(verdict, Verdict::Deny);
    }

    #[test]
    fn tourist_may_manage_own_booking() {
        for op in [Operation::Read, Operation::Update, Operation::Delete] {
            assert_eq!(
                decide(TOURIST, op, ResourceKind::Booking, booking()),
                Verdict::Allow
            );
        }
    }

    #[test]
    fn host_may_manage_booking_on_their_experience() {
        for op in [Operation::Read, Operation::Update, Operation::Delete] {
            assert_eq!(
                decide(HOST, op, ResourceKind::Booking, booking()),
                Verdict::Allow
            );
        }
    }

    #[test]
    fn stranger_is_denied_booking_access() {
        for op in [Operation::Read, Operation::Update, Operation::Delete] {
            assert_eq!(
                decide(STRANGER, op, ResourceKind::Booking, booking()),
                Verdict::Deny
            );
        }
    }

    #[test]
    fn enrollment_owner_allowed_host_irrelevant() {
        // Even if a host_id sneaks into the ownership, it confers nothing for
        // enrollments.
        let ownership = Ownership {
            user_id: TOURIST.id,
            host_id: Some(HOST.id),
        };
        assert_eq!(
            decide(TOURIST, Operation::Read, ResourceKind::Enrollment, ownership),
            Verdict::Allow
        );
        assert_eq!(
            decide(HOST, Operation::Read, ResourceKind::Enrollment, ownership),
            Verdict::Deny
        );
    }

    #[test]
    fn registration_follows_direct_ownership() {
        let own = Ownership::direct(TOURIST.id);
        assert_eq!(
            decide(TOURIST, Operation::Delete, ResourceKind::Registration, own),
            Verdict::Allow
        );
        assert_eq!(
            decide(STRANGER, Operation::Delete, ResourceKind::Registration, own),
            Verdict::Deny
        );
    }

    #[test]
    fn user_filter_passes_through_for_admin() {
        assert_eq!(scope_user_filter(ADMIN, None), None);
        assert_eq!(scope_user_filter(ADMIN, Some(42)), Some(42));
    }

    #[test]
    fn user_filter_forced_to_self_for_non_admin() {
        assert_eq!(scope_user_filter(TOURIST, None), Some(TOURIST.id));
        // Asking for someone else's records still yields only your own.
        assert_eq!(scope_user_filter(TOURIST, Some(STRANGER.id)), Some(TOURIST.id));
    }

    #[test]
    fn booking_list_scope_admin_unchanged() {
        let scope = scope_booking_list(ADMIN, Some(10), Some(20));
        assert_eq!(scope.user_id, Some(10));
        assert_eq!(scope.host_id, Some(20));
    }

    #[test]
    fn booking_list_scope_provider_view_for_own_host_id() {
        let scope = scope_booking_list(HOST, None, Some(HOST.id));
        assert_eq!(scope.user_id, None);
        assert_eq!(scope.host_id, Some(HOST.id));
    }

    #[test]
    fn booking_list_scope_foreign_filters_collapse_to_self() {
        // Requesting another user's bookings or another host's provider view
        // both collapse to the caller's own tourist scope.
        let scope = scope_booking_list(TOURIST, Some(STRANGER.id), None);
        assert_eq!(scope.user_id, Some(TOURIST.id));
        assert_eq!(scope.host_id, None);

        let scope = scope_booking_list(TOURIST, None, Some(HOST.id));
        assert_eq!(scope.user_id, Some(TOURIST.id));
        assert_eq!(scope.host_id, None);
    }
}
