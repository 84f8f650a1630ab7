//! Integration tests for enrollment persistence and the uniqueness
//! invariant.
//!
//! - Default `enrolled` state on insert
//! - Unique constraint on (user_id, course_id) surfaces as 23505
//! - Completion stamps `completed_at`
//! - Scoped listing

use sqlx::PgPool;
use ecotours_db::models::course::CreateCourse;
use ecotours_db::models::enrollment::CreateEnrollment;
use ecotours_db::models::user::CreateUser;
use ecotours_db::repositories::{CourseRepo, EnrollmentRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$test".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        account_type: "tourist".to_string(),
        is_admin: false,
        profile_picture: None,
        bio: None,
        phone: None,
    }
}

fn new_course(title: &str) -> CreateCourse {
    CreateCourse {
        title: title.to_string(),
        description: "Conservation basics".to_string(),
        category: "conservation".to_string(),
        image: None,
        duration: Some("4 weeks".to_string()),
        topics: vec!["wildlife".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Test: Insert defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_enrollment_starts_enrolled(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("u@example.com")).await.unwrap();
    let course = CourseRepo::create(&pool, &new_course("Eco 101")).await.unwrap();

    let enrollment = EnrollmentRepo::create(
        &pool,
        &CreateEnrollment {
            user_id: user.id,
            course_id: course.id,
        },
    )
    .await
    .unwrap();

    assert_eq!(enrollment.status, "enrolled");
    assert!(enrollment.completed_at.is_none());
}

// ---------------------------------------------------------------------------
// Test: Unique constraint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_enrollment_violates_unique_constraint(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("u@example.com")).await.unwrap();
    let course = CourseRepo::create(&pool, &new_course("Eco 101")).await.unwrap();
    let input = CreateEnrollment {
        user_id: user.id,
        course_id: course.id,
    };

    EnrollmentRepo::create(&pool, &input).await.unwrap();

    // The second insert for the same pair must fail at the store level, even
    // without the workflow's explicit pre-check.
    let err = EnrollmentRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_enrollments_user_course"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: Completion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_complete_stamps_completed_at(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("u@example.com")).await.unwrap();
    let course = CourseRepo::create(&pool, &new_course("Eco 101")).await.unwrap();
    let enrollment = EnrollmentRepo::create(
        &pool,
        &CreateEnrollment {
            user_id: user.id,
            course_id: course.id,
        },
    )
    .await
    .unwrap();

    let completed = EnrollmentRepo::complete(&pool, enrollment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, "completed");
    assert!(completed.completed_at.is_some());
}

// ---------------------------------------------------------------------------
// Test: Scoped listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_scoped_to_user(pool: PgPool) {
    let alice = UserRepo::create(&pool, &new_user("alice@example.com")).await.unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob@example.com")).await.unwrap();
    let course_a = CourseRepo::create(&pool, &new_course("Eco 101")).await.unwrap();
    let course_b = CourseRepo::create(&pool, &new_course("Eco 201")).await.unwrap();

    EnrollmentRepo::create(
        &pool,
        &CreateEnrollment {
            user_id: alice.id,
            course_id: course_a.id,
        },
    )
    .await
    .unwrap();
    EnrollmentRepo::create(
        &pool,
        &CreateEnrollment {
            user_id: alice.id,
            course_id: course_b.id,
        },
    )
    .await
    .unwrap();
    EnrollmentRepo::create(
        &pool,
        &CreateEnrollment {
            user_id: bob.id,
            course_id: course_a.id,
        },
    )
    .await
    .unwrap();

    let alice_rows = EnrollmentRepo::list(&pool, Some(alice.id)).await.unwrap();
    assert_eq!(alice_rows.len(), 2);
    assert!(alice_rows.iter().all(|e| e.user_id == alice.id));
    // List rows carry the joined course title and user summary.
    assert!(alice_rows.iter().any(|e| e.course_title == "Eco 101"));
    assert_eq!(alice_rows[0].user_email, "alice@example.com");

    let all_rows = EnrollmentRepo::list(&pool, None).await.unwrap();
    assert_eq!(all_rows.len(), 3);
}
