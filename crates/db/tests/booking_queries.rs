//! Integration tests for booking persistence and filtered listing.
//!
//! Exercises the repository layer against a real database:
//! - Create and fetch bookings
//! - Filter combinations (user, experience, status)
//! - Provider scope via experience id sets, including the empty set
//! - Partial updates and deletes

use chrono::Utc;
use sqlx::PgPool;
use ecotours_db::models::booking::{BookingFilter, CreateBooking, UpdateBooking};
use ecotours_db::models::experience::CreateExperience;
use ecotours_db::models::user::CreateUser;
use ecotours_db::repositories::{BookingRepo, ExperienceRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str, account_type: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$test".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        account_type: account_type.to_string(),
        is_admin: false,
        profile_picture: None,
        bio: None,
        phone: None,
    }
}

fn new_experience(host_id: i64, title: &str) -> CreateExperience {
    CreateExperience {
        host_id,
        title: title.to_string(),
        description: "An eco experience".to_string(),
        location: "Kigali".to_string(),
        price: 100.0,
        duration: 4.0,
        max_participants: 10,
        category: "nature".to_string(),
        images: vec![],
    }
}

fn new_booking(user_id: i64, experience_id: i64, status: &str) -> CreateBooking {
    CreateBooking {
        user_id,
        experience_id,
        date: Utc::now(),
        participants: 2,
        total_amount: 200.0,
        status: status.to_string(),
        payment_id: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Create and fetch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_booking(pool: PgPool) {
    let tourist = UserRepo::create(&pool, &new_user("t@example.com", "tourist"))
        .await
        .unwrap();
    let host = UserRepo::create(&pool, &new_user("h@example.com", "host"))
        .await
        .unwrap();
    let experience = ExperienceRepo::create(&pool, &new_experience(host.id, "Lake Kivu Kayak"))
        .await
        .unwrap();

    let booking = BookingRepo::create(&pool, &new_booking(tourist.id, experience.id, "pending"))
        .await
        .unwrap();
    assert_eq!(booking.user_id, tourist.id);
    assert_eq!(booking.experience_id, experience.id);
    assert_eq!(booking.participants, 2);
    assert_eq!(booking.status, "pending");

    let found = BookingRepo::find_by_id(&pool, booking.id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, booking.id);
}

// ---------------------------------------------------------------------------
// Test: Filtered listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_user_and_status(pool: PgPool) {
    let alice = UserRepo::create(&pool, &new_user("alice@example.com", "tourist"))
        .await
        .unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob@example.com", "tourist"))
        .await
        .unwrap();
    let host = UserRepo::create(&pool, &new_user("host@example.com", "host"))
        .await
        .unwrap();
    let experience = ExperienceRepo::create(&pool, &new_experience(host.id, "Canopy Walk"))
        .await
        .unwrap();

    BookingRepo::create(&pool, &new_booking(alice.id, experience.id, "pending"))
        .await
        .unwrap();
    BookingRepo::create(&pool, &new_booking(alice.id, experience.id, "confirmed"))
        .await
        .unwrap();
    BookingRepo::create(&pool, &new_booking(bob.id, experience.id, "pending"))
        .await
        .unwrap();

    let alice_only = BookingRepo::list(
        &pool,
        &BookingFilter {
            user_id: Some(alice.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(alice_only.len(), 2);
    assert!(alice_only.iter().all(|b| b.user_id == alice.id));

    let alice_pending = BookingRepo::list(
        &pool,
        &BookingFilter {
            user_id: Some(alice.id),
            status: Some("pending".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(alice_pending.len(), 1);
    assert_eq!(alice_pending[0].status, "pending");
}

// ---------------------------------------------------------------------------
// Test: Provider scope via experience id set
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_experience_ids(pool: PgPool) {
    let tourist = UserRepo::create(&pool, &new_user("t@example.com", "tourist"))
        .await
        .unwrap();
    let host_a = UserRepo::create(&pool, &new_user("a@example.com", "host"))
        .await
        .unwrap();
    let host_b = UserRepo::create(&pool, &new_user("b@example.com", "host"))
        .await
        .unwrap();
    let exp_a = ExperienceRepo::create(&pool, &new_experience(host_a.id, "A"))
        .await
        .unwrap();
    let exp_b = ExperienceRepo::create(&pool, &new_experience(host_b.id, "B"))
        .await
        .unwrap();

    BookingRepo::create(&pool, &new_booking(tourist.id, exp_a.id, "pending"))
        .await
        .unwrap();
    BookingRepo::create(&pool, &new_booking(tourist.id, exp_b.id, "pending"))
        .await
        .unwrap();

    let ids = ExperienceRepo::ids_for_host(&pool, host_a.id).await.unwrap();
    assert_eq!(ids, vec![exp_a.id]);

    let host_a_bookings = BookingRepo::list(
        &pool,
        &BookingFilter {
            experience_ids: Some(ids),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(host_a_bookings.len(), 1);
    assert_eq!(host_a_bookings[0].experience_id, exp_a.id);
    assert_eq!(host_a_bookings[0].host_id, host_a.id);
}

// ---------------------------------------------------------------------------
// Test: Empty experience id set matches nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_experience_ids_yields_empty_result(pool: PgPool) {
    let tourist = UserRepo::create(&pool, &new_user("t@example.com", "tourist"))
        .await
        .unwrap();
    let host = UserRepo::create(&pool, &new_user("h@example.com", "host"))
        .await
        .unwrap();
    let experience = ExperienceRepo::create(&pool, &new_experience(host.id, "Trek"))
        .await
        .unwrap();
    BookingRepo::create(&pool, &new_booking(tourist.id, experience.id, "pending"))
        .await
        .unwrap();

    // A host with no experiences must see nothing, not everything.
    let bookings = BookingRepo::list(
        &pool,
        &BookingFilter {
            experience_ids: Some(vec![]),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(bookings.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Partial update and delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_and_delete_booking(pool: PgPool) {
    let tourist = UserRepo::create(&pool, &new_user("t@example.com", "tourist"))
        .await
        .unwrap();
    let host = UserRepo::create(&pool, &new_user("h@example.com", "host"))
        .await
        .unwrap();
    let experience = ExperienceRepo::create(&pool, &new_experience(host.id, "Trek"))
        .await
        .unwrap();
    let booking = BookingRepo::create(&pool, &new_booking(tourist.id, experience.id, "pending"))
        .await
        .unwrap();

    let updated = BookingRepo::update(
        &pool,
        booking.id,
        &UpdateBooking {
            date: None,
            participants: Some(5),
            total_amount: None,
            status: Some("confirmed".to_string()),
            payment_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.participants, 5);
    assert_eq!(updated.status, "confirmed");
    // Untouched fields keep their values.
    assert_eq!(updated.total_amount, booking.total_amount);

    let deleted = BookingRepo::delete(&pool, booking.id).await.unwrap();
    assert!(deleted.is_some());
    assert!(BookingRepo::find_by_id(&pool, booking.id)
        .await
        .unwrap()
        .is_none());
}
