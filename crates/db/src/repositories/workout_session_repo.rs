//! Repository for the `"WorkoutSessions"` table.
//!
//! Single-row lookups always match on both `session_id` and `member_id`.

use fitcenter_core::schema::WorkoutSessionInput;
use fitcenter_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::Member;
use crate::models::workout_session::WorkoutSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "session_id, member_id, session_date, session_time, activity";

/// Provides CRUD operations for workout sessions.
pub struct WorkoutSessionRepo;

impl WorkoutSessionRepo {
    /// Insert a new session, returning the created row.
    ///
    /// Fails with a foreign key violation if `member_id` names no member.
    pub async fn create(
        pool: &PgPool,
        input: &WorkoutSessionInput,
    ) -> Result<WorkoutSession, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO "WorkoutSessions"
                (session_id, member_id, session_date, session_time, activity)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(input.session_id)
            .bind(input.member_id)
            .bind(input.session_date)
            .bind(input.session_time)
            .bind(&input.activity)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its `(session_id, member_id)` pair.
    pub async fn find_by_key(
        pool: &PgPool,
        session_id: DbId,
        member_id: DbId,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM "WorkoutSessions"
             WHERE session_id = $1 AND member_id = $2"#
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(session_id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// List every session ordered by session id.
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "WorkoutSessions" ORDER BY session_id"#);
        sqlx::query_as::<_, WorkoutSession>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the sessions owned by one member, ordered by date then time.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM "WorkoutSessions"
             WHERE member_id = $1
             ORDER BY session_date, session_time, session_id"#
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Load the member that owns `session`.
    pub async fn find_member(
        pool: &PgPool,
        session: &WorkoutSession,
    ) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(r#"SELECT id, name, age FROM "Members" WHERE id = $1"#)
            .bind(session.member_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every field of the session matching `(session_id, member_id)`,
    /// including both key columns.
    ///
    /// Returns `None` if no row matches.
    pub async fn update(
        pool: &PgPool,
        session_id: DbId,
        member_id: DbId,
        input: &WorkoutSessionInput,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let query = format!(
            r#"UPDATE "WorkoutSessions" SET
                session_id = $3,
                member_id = $4,
                session_date = $5,
                session_time = $6,
                activity = $7
             WHERE session_id = $1 AND member_id = $2
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(session_id)
            .bind(member_id)
            .bind(input.session_id)
            .bind(input.member_id)
            .bind(input.session_date)
            .bind(input.session_time)
            .bind(&input.activity)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session matching `(session_id, member_id)`. Returns `true`
    /// if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        session_id: DbId,
        member_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"DELETE FROM "WorkoutSessions" WHERE session_id = $1 AND member_id = $2"#,
        )
        .bind(session_id)
        .bind(member_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
