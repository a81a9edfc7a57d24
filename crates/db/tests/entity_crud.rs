//! Integration tests for member and workout session CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Create, read, list, update, delete for both tables
//! - Primary key replacement on update
//! - Compound `(session_id, member_id)` matching
//! - Duplicate key and foreign key violations

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};
use fitcenter_core::schema::{MemberInput, WorkoutSessionInput};
use fitcenter_db::repositories::{MemberRepo, WorkoutSessionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_member(id: i64, name: &str, age: i32) -> MemberInput {
    MemberInput {
        id,
        name: name.to_string(),
        age,
    }
}

fn new_session(session_id: i64, member_id: i64, activity: &str) -> WorkoutSessionInput {
    WorkoutSessionInput {
        session_id,
        member_id,
        session_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        session_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
        activity: activity.to_string(),
    }
}

fn db_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_member(pool: PgPool) {
    let created = MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let found = MemberRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.name, "Alex");
    assert_eq!(found.age, 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_member_returns_none(pool: PgPool) {
    let found = MemberRepo::find_by_id(&pool, 404).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_member_id_rejected(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    let err = MemberRepo::create(&pool, &new_member(1, "Jordan", 25))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_members_ordered_by_id(pool: PgPool) {
    for (id, name) in [(3, "C"), (1, "A"), (2, "B")] {
        MemberRepo::create(&pool, &new_member(id, name, 20))
            .await
            .unwrap();
    }

    let members = MemberRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_member_replaces_all_fields(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();

    let updated = MemberRepo::update(&pool, 1, &new_member(1, "Alexandra", 31))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Alexandra");
    assert_eq!(updated.age, 31);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_member_can_change_id(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();

    let updated = MemberRepo::update(&pool, 1, &new_member(9, "Alex", 30))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, 9);
    assert!(MemberRepo::find_by_id(&pool, 1).await.unwrap().is_none());
    assert!(MemberRepo::find_by_id(&pool, 9).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_member_returns_none(pool: PgPool) {
    let result = MemberRepo::update(&pool, 77, &new_member(77, "Ghost", 1))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_member(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();

    assert!(MemberRepo::delete(&pool, 1).await.unwrap());
    assert!(!MemberRepo::delete(&pool, 1).await.unwrap());
    assert!(MemberRepo::find_by_id(&pool, 1).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_member_with_sessions_rejected(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();

    let err = MemberRepo::delete(&pool, 1).await.unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
    assert!(MemberRepo::find_by_id(&pool, 1).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Workout sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_session_by_compound_key(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    let created = WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();

    let found = WorkoutSessionRepo::find_by_key(&pool, 10, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
    assert_eq!(found.session_time, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lookup_requires_both_keys(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    MemberRepo::create(&pool, &new_member(2, "Sam", 40))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();

    let wrong_member = WorkoutSessionRepo::find_by_key(&pool, 10, 2).await.unwrap();
    assert!(wrong_member.is_none());

    assert!(!WorkoutSessionRepo::delete(&pool, 10, 2).await.unwrap());
    let updated = WorkoutSessionRepo::update(&pool, 10, 2, &new_session(10, 2, "Yoga"))
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_for_missing_member_rejected(pool: PgPool) {
    let err = WorkoutSessionRepo::create(&pool, &new_session(10, 999_999, "Spin"))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_session_id_rejected(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();

    let result = WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Yoga")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_session_replaces_all_fields(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    MemberRepo::create(&pool, &new_member(2, "Sam", 40))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();

    let replacement = WorkoutSessionInput {
        session_id: 11,
        member_id: 2,
        session_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        session_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        activity: "Rowing".to_string(),
    };
    let updated = WorkoutSessionRepo::update(&pool, 10, 1, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.session_id, 11);
    assert_eq!(updated.member_id, 2);
    assert_eq!(updated.activity, "Rowing");

    assert!(WorkoutSessionRepo::find_by_key(&pool, 10, 1)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_session_navigation(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    MemberRepo::create(&pool, &new_member(2, "Sam", 40))
        .await
        .unwrap();
    let session = WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(11, 1, "Yoga"))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(12, 2, "Boxing"))
        .await
        .unwrap();

    let owned = WorkoutSessionRepo::list_by_member(&pool, 1).await.unwrap();
    let ids: Vec<i64> = owned.iter().map(|s| s.session_id).collect();
    assert_eq!(ids, vec![10, 11]);

    let owner = WorkoutSessionRepo::find_member(&pool, &session)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.name, "Alex");

    assert_eq!(WorkoutSessionRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_session(pool: PgPool) {
    MemberRepo::create(&pool, &new_member(1, "Alex", 30))
        .await
        .unwrap();
    WorkoutSessionRepo::create(&pool, &new_session(10, 1, "Spin"))
        .await
        .unwrap();

    assert!(WorkoutSessionRepo::delete(&pool, 10, 1).await.unwrap());
    assert!(WorkoutSessionRepo::list(&pool).await.unwrap().is_empty());

    // With its session gone the member can be removed.
    assert!(MemberRepo::delete(&pool, 1).await.unwrap());
}
